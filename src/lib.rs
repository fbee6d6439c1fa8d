//! # eventhub
//!
//! **eventhub** is a small, synchronous publish/subscribe hub for a single process.
//!
//! Objects compose an [`EventHub`] (or implement [`Observable`] around one) to gain named
//! events: declare the event types they publish, let others subscribe handlers, and fire
//! events that invoke every subscriber inline, in registration order.
//!
//! ## Architecture
//! ```text
//!   declare("Go_To_Bed") ──► EventType("go_to_bed") ──► Registry entry (empty list)
//!
//!   subscribe("GO_TO_BED", handler, scope)
//!        │   undeclared ──► Err(UndeclaredEventError)
//!        └─► push Subscription { handler, scope }
//!
//!   fire("go_to_bed", args)
//!        ├─► snapshot list (lock released)
//!        └─► for each subscription, in order:
//!              handler.call(&Call { event, receiver, args })
//!                 ├─ Ok  ──► next
//!                 └─ Err ──► stop, Err(DispatchError)
//! ```
//!
//! ### Per-type lifecycle
//! ```text
//! Undeclared ──declare──► Declared-Empty ◄──clear / last unsubscribe──┐
//!                               │                                     │
//!                               └──subscribe──► Declared-With-Subscribers
//! ```
//!
//! ## Features
//! | Area           | Description                                             | Key types                                  |
//! |----------------|---------------------------------------------------------|--------------------------------------------|
//! | **Hub**        | Declare, subscribe, unsubscribe, fire, clear            | [`EventHub`], [`HubConfig`]                |
//! | **Handlers**   | Closures, delegates, placeholders                       | [`Handler`], [`HandlerFn`], [`Delegate`]   |
//! | **Invocation** | Event, receiver and arguments seen by a handler          | [`Call`], [`Receiver`], [`ScopeRef`]       |
//! | **Composition**| Event capability for host types                         | [`Observable`]                             |
//! | **Errors**     | Typed failures                                          | [`UndeclaredEventError`], [`DispatchError`]|
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use eventhub::{Call, EventHub, HandlerFn, HandlerRef, ScopeRef};
//!
//! let hub = EventHub::new();
//! hub.declare(["go_to_bed"]);
//!
//! let remind: HandlerRef = HandlerFn::arc("remind", |call: &Call<'_>| {
//!     let who = call.scope::<String>().map(String::as_str).unwrap_or("someone");
//!     println!("{who} should sleep before {}", call.arg(1).unwrap_or(&json!(null)));
//!     Ok(())
//! });
//! let coder: ScopeRef = Arc::new(String::from("coder"));
//!
//! hub.subscribe("GO_TO_BED", Some(remind.clone()), Some(coder))?;
//! hub.fire("go_to_bed", &[json!("goal"), json!(12)])?;
//!
//! hub.unsubscribe("go_to_bed", Some(&remind));
//! assert_eq!(hub.subscriber_count("go_to_bed"), Some(0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
mod core;
mod error;
mod events;
mod handlers;

// ---- Public re-exports ----

pub use crate::core::{EventHub, HubConfig, Observable};
pub use error::{DispatchError, UndeclaredEventError};
pub use events::EventType;
pub use handlers::{
    Call, Delegate, Handler, HandlerFn, HandlerRef, HandlerResult, Noop, Receiver, ScopeRef,
};

// Optional: expose a simple built-in printing handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogWriter;
