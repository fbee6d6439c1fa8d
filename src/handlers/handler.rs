//! # Core handler trait
//!
//! `Handler` is the extension point for reacting to fired events. A hub invokes
//! handlers inline, in registration order, on the thread that called `fire`.
//!
//! ## Contract
//! - Handlers run synchronously; `fire` returns only after every handler returned.
//! - Returning `Err` stops the current dispatch: later handlers for the same fire are skipped
//!   and the error surfaces from `fire` as [`DispatchError`](crate::DispatchError).
//! - Handlers may call back into the hub (subscribe, unsubscribe, fire...). Such changes
//!   become visible on the next fire.
//!
//! ## Identity
//! Handlers are shared as [`HandlerRef`] (`Arc<dyn Handler>`). Unsubscribing compares the
//! `Arc` allocation, so keep a clone of the exact `HandlerRef` you subscribed.
//!
//! ## Example
//! ```rust
//! use eventhub::{Call, Handler, HandlerResult};
//!
//! struct Audit;
//!
//! impl Handler for Audit {
//!     fn call(&self, call: &Call<'_>) -> HandlerResult {
//!         let _ = call.args;
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//! ```

use std::sync::Arc;

use super::call::Call;

/// Outcome of a single handler invocation.
pub type HandlerResult = anyhow::Result<()>;

/// Shared handle to a handler.
pub type HandlerRef = Arc<dyn Handler>;

/// Contract for event handlers.
pub trait Handler: Send + Sync + 'static {
    /// Handle a single invocation.
    fn call(&self, call: &Call<'_>) -> HandlerResult;

    /// Human-readable name (for logs and errors).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Reference identity of two handler handles.
///
/// Compares data pointers only, so two handles to the same allocation are equal even when
/// their vtable pointers differ across codegen units.
#[inline]
pub(crate) fn same_handler(a: &HandlerRef, b: &HandlerRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
