//! # Observable: event capability for host types.
//!
//! A host type composes an [`EventHub`] as a field and implements [`Observable`] by pointing
//! [`Observable::hub`] at it. The provided methods forward to the hub and return the host,
//! so host calls chain the same way hub calls do.
//!
//! ## Example
//! ```rust
//! use serde_json::json;
//! use eventhub::{Call, EventHub, HandlerFn, Observable};
//!
//! struct Door {
//!     events: EventHub,
//! }
//!
//! impl Observable for Door {
//!     fn hub(&self) -> &EventHub {
//!         &self.events
//!     }
//! }
//!
//! let door = Door { events: EventHub::new() };
//! door.declare(["opened"])
//!     .subscribe("opened", Some(HandlerFn::arc("bell", |_: &Call<'_>| Ok(()))), None)?
//!     .fire("opened", &[json!("front")])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use serde_json::Value;

use crate::core::hub::EventHub;
use crate::error::{DispatchError, UndeclaredEventError};
use crate::handlers::{HandlerRef, ScopeRef};

/// Host types exposing the operations of a composed [`EventHub`].
pub trait Observable {
    /// The composed hub.
    fn hub(&self) -> &EventHub;

    /// See [`EventHub::declare`].
    fn declare<I>(&self, types: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.hub().declare(types);
        self
    }

    /// See [`EventHub::subscribe`].
    fn subscribe(
        &self,
        event_type: impl fmt::Display,
        handler: Option<HandlerRef>,
        scope: Option<ScopeRef>,
    ) -> Result<&Self, UndeclaredEventError> {
        self.hub().subscribe(event_type, handler, scope)?;
        Ok(self)
    }

    /// See [`EventHub::unsubscribe`].
    fn unsubscribe(&self, event_type: impl fmt::Display, handler: Option<&HandlerRef>) -> &Self {
        self.hub().unsubscribe(event_type, handler);
        self
    }

    /// See [`EventHub::fire`].
    fn fire(&self, event_type: impl fmt::Display, args: &[Value]) -> Result<&Self, DispatchError> {
        self.hub().fire(event_type, args)?;
        Ok(self)
    }

    /// See [`EventHub::clear`].
    fn clear(&self, event_type: impl fmt::Display) -> &Self {
        self.hub().clear(event_type);
        self
    }
}
