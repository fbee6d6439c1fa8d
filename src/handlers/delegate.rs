//! # Delegates: handlers with a bound scope and leading arguments.
//!
//! A [`Delegate`] wraps another handler. Whenever it is invoked, the wrapped handler runs with:
//! - the delegate's bound scope as receiver ([`Receiver::Unbound`] when none was bound),
//!   whatever receiver the delegate itself was called with;
//! - the bound arguments followed by the arguments of the call.
//!
//! Delegates are plain handlers, so they can be subscribed to a hub or invoked directly.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use eventhub::{Call, Delegate, HandlerFn, ScopeRef};
//!
//! let greet = HandlerFn::arc("greet", |call: &Call<'_>| {
//!     assert_eq!(call.scope::<&str>(), Some(&"bedroom"));
//!     assert_eq!(call.args, [json!("a"), json!("b")]);
//!     Ok(())
//! });
//!
//! let scope: ScopeRef = Arc::new("bedroom");
//! let delegate = Delegate::new(greet, Some(scope), vec![json!("a")]);
//! delegate.invoke(&[json!("b")]).unwrap();
//! ```

use std::sync::Arc;

use serde_json::Value;

use super::call::{Call, Receiver, ScopeRef};
use super::handler::{Handler, HandlerRef, HandlerResult};

/// Handler bound to a scope and a list of leading arguments.
pub struct Delegate {
    name: String,
    target: HandlerRef,
    scope: Option<ScopeRef>,
    bound_args: Vec<Value>,
}

impl Delegate {
    /// Binds `target` to `scope` and `bound_args`.
    pub fn new(target: HandlerRef, scope: Option<ScopeRef>, bound_args: Vec<Value>) -> Arc<Self> {
        let name = format!("delegate({})", target.name());
        Arc::new(Self {
            name,
            target,
            scope,
            bound_args,
        })
    }

    /// Invokes the delegate outside of any hub.
    pub fn invoke(&self, args: &[Value]) -> HandlerResult {
        self.forward(None, args)
    }

    fn receiver(&self) -> Receiver<'_> {
        match &self.scope {
            Some(scope) => Receiver::Scope(scope),
            None => Receiver::Unbound,
        }
    }

    fn forward(&self, event: Option<&crate::EventType>, args: &[Value]) -> HandlerResult {
        let mut all = Vec::with_capacity(self.bound_args.len() + args.len());
        all.extend_from_slice(&self.bound_args);
        all.extend_from_slice(args);

        let call = match event {
            Some(event) => Call::new(event, self.receiver(), &all),
            None => Call::detached(self.receiver(), &all),
        };
        self.target.call(&call)
    }
}

impl std::fmt::Debug for Delegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delegate")
            .field("name", &self.name)
            .field("scoped", &self.scope.is_some())
            .field("bound_args", &self.bound_args)
            .finish()
    }
}

impl Handler for Delegate {
    fn call(&self, call: &Call<'_>) -> HandlerResult {
        self.forward(call.event, call.args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
