//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(&Call<'_>) -> HandlerResult`. State the closure needs
//! across invocations has to be shared explicitly (`Arc<Mutex<...>>`, atomics), since the
//! handler is only ever borrowed immutably.
//!
//! ## Example
//! ```rust
//! use eventhub::{Call, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef = HandlerFn::arc("greeter", |call: &Call<'_>| {
//!     println!("hello {:?}", call.arg(0));
//!     Ok(())
//! });
//!
//! assert_eq!(h.name(), "greeter");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use super::call::Call;
use super::handler::{Handler, HandlerResult};

/// Function-backed handler implementation.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F>
where
    F: Fn(&Call<'_>) -> HandlerResult + Send + Sync + 'static,
{
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> std::fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Call<'_>) -> HandlerResult + Send + Sync + 'static,
{
    fn call(&self, call: &Call<'_>) -> HandlerResult {
        (self.f)(call)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
