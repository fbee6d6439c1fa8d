//! # Invocation context handed to every handler.
//!
//! A [`Call`] bundles what a handler sees when it runs:
//! - the [`EventType`] being fired (absent when a [`Delegate`](crate::Delegate) is invoked directly);
//! - the [`Receiver`] it runs against;
//! - the positional arguments passed to `fire`.
//!
//! ## Receiver resolution
//! ```text
//! subscription scope        HubConfig::true_scope_unbound    receiver
//! ───────────────────────   ──────────────────────────────   ─────────────────
//! None                      any                              Receiver::Hub
//! Some(true: bool)          true (default)                   Receiver::Unbound
//! Some(true: bool)          false                            Receiver::Scope
//! Some(other)               any                              Receiver::Scope
//! ```
//!
//! Only an absent scope falls back to the hub. Other "empty-looking" scopes such as `false`,
//! `0` or `""` are ordinary values and reach the handler as [`Receiver::Scope`].

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use crate::core::EventHub;
use crate::events::EventType;

/// Shared, type-erased scope object a handler is invoked against.
pub type ScopeRef = Arc<dyn Any + Send + Sync>;

/// What a handler is invoked against.
#[derive(Clone, Copy)]
pub enum Receiver<'a> {
    /// No explicit scope was registered: the firing hub acts as receiver.
    Hub(&'a EventHub),
    /// The scope registered with the subscription (or bound by a delegate).
    Scope(&'a ScopeRef),
    /// Explicitly no receiver.
    Unbound,
}

impl<'a> Receiver<'a> {
    /// Returns the scope object, if this receiver is one.
    pub fn scope(&self) -> Option<&'a ScopeRef> {
        match *self {
            Receiver::Scope(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the hub, if this receiver is the firing hub.
    pub fn hub(&self) -> Option<&'a EventHub> {
        match *self {
            Receiver::Hub(h) => Some(h),
            _ => None,
        }
    }

    /// True for [`Receiver::Unbound`].
    pub fn is_unbound(&self) -> bool {
        matches!(self, Receiver::Unbound)
    }
}

impl std::fmt::Debug for Receiver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Receiver::Hub(_) => f.write_str("Hub"),
            Receiver::Scope(_) => f.write_str("Scope"),
            Receiver::Unbound => f.write_str("Unbound"),
        }
    }
}

/// Arguments of a single handler invocation.
#[derive(Clone, Copy, Debug)]
pub struct Call<'a> {
    /// Event being fired; `None` for a delegate invoked outside of a hub.
    pub event: Option<&'a EventType>,
    /// Receiver the handler runs against.
    pub receiver: Receiver<'a>,
    /// Positional arguments.
    pub args: &'a [Value],
}

impl<'a> Call<'a> {
    /// Call made by a hub while firing `event`.
    pub fn new(event: &'a EventType, receiver: Receiver<'a>, args: &'a [Value]) -> Self {
        Self {
            event: Some(event),
            receiver,
            args,
        }
    }

    /// Call made outside of any hub.
    pub fn detached(receiver: Receiver<'a>, args: &'a [Value]) -> Self {
        Self {
            event: None,
            receiver,
            args,
        }
    }

    /// Positional argument `idx`, if present.
    #[inline]
    pub fn arg(&self, idx: usize) -> Option<&'a Value> {
        self.args.get(idx)
    }

    /// Downcasts the scope to `T`.
    ///
    /// Returns `None` when the receiver is not a scope or the scope is of another type.
    pub fn scope<T: Any>(&self) -> Option<&'a T> {
        self.receiver.scope().and_then(|s| s.downcast_ref::<T>())
    }

    /// The firing hub, when no explicit scope was registered.
    #[inline]
    pub fn hub(&self) -> Option<&'a EventHub> {
        self.receiver.hub()
    }
}
