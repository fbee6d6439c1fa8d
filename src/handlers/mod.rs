//! # Event handlers.
//!
//! This module provides the [`Handler`] trait, the [`Call`] context handlers receive, and the
//! built-in implementations.
//!
//! ## Architecture
//! ```text
//! EventHub::fire(type, args)
//!     │  snapshot of the type's subscriptions (lock released)
//!     ├──► sub 1: handler.call(&Call { event, receiver, args })
//!     ├──► sub 2: None ──► Noop
//!     └──► sub N: Delegate ──► target.call(bound scope, bound args ++ args)
//! ```
//!
//! ## Built-in handlers
//! - [`HandlerFn`] wraps a closure
//! - [`Delegate`] binds a scope and leading arguments to another handler
//! - [`Noop`] stands in for placeholder subscriptions
//! - `LogWriter` prints invocations (feature `logging`)

mod call;
mod delegate;
mod handler;
mod handler_fn;
#[cfg(feature = "logging")]
mod log;
mod noop;

pub use call::{Call, Receiver, ScopeRef};
pub use delegate::Delegate;
pub(crate) use handler::same_handler;
pub use handler::{Handler, HandlerRef, HandlerResult};
pub use handler_fn::HandlerFn;
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use noop::Noop;
