//! # EventHub: declare, subscribe, fire.
//!
//! [`EventHub`] owns the [`Registry`] behind a single [`parking_lot::Mutex`] and exposes the
//! whole publish/subscribe surface. Every operation normalizes its event type through
//! [`EventType::new`] and returns the hub, so calls chain.
//!
//! ## Dispatch
//! ```text
//! fire(type, args)
//!   ├─► lock ─► snapshot(type) ─► unlock        (undeclared → return Ok)
//!   └─► for sub in snapshot (registration order):
//!         ├─ handler = sub.handler or Noop
//!         ├─ receiver = resolve(sub.scope)
//!         └─ handler.call(&Call { event, receiver, args })?   (Err → stop, DispatchError)
//! ```
//!
//! ## Re-entrancy
//! The lock is never held while a handler runs. Handlers may subscribe, unsubscribe, clear
//! or fire on the same hub; those changes apply to the next fire, not to the one in flight.
//! Handler panics are not caught and unwind through `fire`.
//! Subscriptions removed by `unsubscribe`, `clear` or a rejected `subscribe` are dropped after
//! the lock is released, so handler and scope destructors may use the hub as well.

use std::fmt;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::config::HubConfig;
use crate::core::registry::{Registry, Subscription};
use crate::error::{DispatchError, UndeclaredEventError};
use crate::events::EventType;
use crate::handlers::{Call, Delegate, HandlerRef, Noop, Receiver, ScopeRef};

/// Synchronous publish/subscribe hub.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use serde_json::json;
/// use eventhub::{Call, EventHub, HandlerFn, ScopeRef};
///
/// let hub = EventHub::new();
/// let on_bed = HandlerFn::arc("on_bed", |call: &Call<'_>| {
///     let who = call.scope::<String>().map(String::as_str).unwrap_or("nobody");
///     println!("{who}: {:?} before {:?}", call.arg(0), call.arg(1));
///     Ok(())
/// });
/// let scope: ScopeRef = Arc::new(String::from("coder"));
///
/// hub.declare(["go_to_bed"])
///     .subscribe("GO_TO_BED", Some(on_bed), Some(scope))?
///     .fire("go_to_bed", &[json!("goal"), json!(12)])?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EventHub {
    registry: Mutex<Registry>,
    config: HubConfig,
}

impl EventHub {
    /// Creates a hub with an empty registry and the default [`HubConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Creates a hub with an empty registry and the given configuration.
    #[must_use]
    pub fn with_config(config: HubConfig) -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            config,
        }
    }

    /// Returns the hub configuration.
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Declares event types.
    ///
    /// Types already declared keep their subscribers. Values are coerced through `Display`.
    pub fn declare<I>(&self, types: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut reg = self.registry.lock();
        for raw in types {
            let event = EventType::new(raw);
            if reg.declare(event.clone()) {
                debug!(event = %event, "declared event type");
            }
        }
        self
    }

    /// Appends a subscription to a declared event type.
    ///
    /// `handler = None` registers a placeholder that does nothing when fired;
    /// `scope = None` makes the hub itself the receiver.
    ///
    /// # Errors
    /// [`UndeclaredEventError`] if the type was never declared. The registry is left unchanged.
    pub fn subscribe(
        &self,
        event_type: impl fmt::Display,
        handler: Option<HandlerRef>,
        scope: Option<ScopeRef>,
    ) -> Result<&Self, UndeclaredEventError> {
        let event = EventType::new(event_type);
        let name = handler.as_ref().map(|h| h.name().to_owned());

        let mut reg = self.registry.lock();
        if let Err(rejected) = reg.push(&event, Subscription { handler, scope }) {
            drop(reg);
            drop(rejected);
            warn!(event = %event, "subscribe to undeclared event type");
            return Err(UndeclaredEventError { event });
        }
        let count = reg.len_of(&event).unwrap_or_default();
        drop(reg);

        debug!(event = %event, handler = name.as_deref().unwrap_or("<none>"), count, "subscribed");
        Ok(self)
    }

    /// Removes the first subscription of `handler` (by reference identity).
    ///
    /// `None` removes the first placeholder subscription. Unknown types and handlers are ignored.
    pub fn unsubscribe(&self, event_type: impl fmt::Display, handler: Option<&HandlerRef>) -> &Self {
        let event = EventType::new(event_type);
        let removed = self.registry.lock().remove_first(&event, handler);
        match removed {
            Some(sub) => debug!(
                event = %event,
                handler = sub.handler.as_ref().map_or("<none>", |h| h.name()),
                "unsubscribed"
            ),
            None => trace!(event = %event, "unsubscribe: no matching subscription"),
        }
        self
    }

    /// Invokes every subscriber of `event_type`, in registration order, with `args`.
    ///
    /// Undeclared types and empty lists are a no-op.
    ///
    /// # Errors
    /// [`DispatchError::Handler`] for the first handler that fails; later handlers are skipped.
    pub fn fire(&self, event_type: impl fmt::Display, args: &[Value]) -> Result<&Self, DispatchError> {
        let event = EventType::new(event_type);
        let Some(snapshot) = self.registry.lock().snapshot(&event) else {
            trace!(event = %event, "fire: undeclared event type");
            return Ok(self);
        };

        trace!(event = %event, subscribers = snapshot.len(), args = args.len(), "firing");
        for (index, sub) in snapshot.iter().enumerate() {
            let handler = sub.handler.clone().unwrap_or_else(Noop::shared);
            let call = Call::new(&event, self.receiver_for(sub.scope.as_ref()), args);

            if let Err(source) = handler.call(&call) {
                debug!(event = %event, handler = handler.name(), index, error = %source, "handler failed");
                return Err(DispatchError::Handler {
                    event,
                    handler: handler.name().to_owned(),
                    index,
                    source,
                });
            }
        }
        Ok(self)
    }

    /// Removes every subscriber of `event_type`, keeping the type declared.
    pub fn clear(&self, event_type: impl fmt::Display) -> &Self {
        let event = EventType::new(event_type);
        // Dropped outside the lock: handler and scope destructors may call back into the hub.
        let removed = self.registry.lock().clear(&event);
        if let Some(removed) = removed {
            debug!(event = %event, removed = removed.len(), "cleared subscribers");
        }
        self
    }

    /// Binds `handler` to `scope` and leading `bound_args`.
    ///
    /// See [`Delegate`]. The result can be subscribed or invoked directly.
    pub fn create_delegate(
        handler: HandlerRef,
        scope: Option<ScopeRef>,
        bound_args: Vec<Value>,
    ) -> HandlerRef {
        Delegate::new(handler, scope, bound_args)
    }

    /// True if `event_type` has been declared.
    pub fn is_declared(&self, event_type: impl fmt::Display) -> bool {
        self.registry.lock().contains(&EventType::new(event_type))
    }

    /// Number of subscriptions of `event_type`, `None` if undeclared.
    pub fn subscriber_count(&self, event_type: impl fmt::Display) -> Option<usize> {
        self.registry.lock().len_of(&EventType::new(event_type))
    }

    /// Sorted list of declared event types.
    pub fn event_types(&self) -> Vec<EventType> {
        self.registry.lock().list()
    }

    fn receiver_for<'a>(&'a self, scope: Option<&'a ScopeRef>) -> Receiver<'a> {
        match scope {
            None => Receiver::Hub(self),
            Some(s) if self.config.true_scope_unbound && s.downcast_ref::<bool>() == Some(&true) => {
                Receiver::Unbound
            }
            Some(s) => Receiver::Scope(s),
        }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("registry", &*self.registry.lock())
            .field("config", &self.config)
            .finish()
    }
}
