//! Error types returned by the hub.
//!
//! This module defines two error types:
//!
//! - [`UndeclaredEventError`] — subscribing to an event type that was never declared.
//! - [`DispatchError`] — a handler failed while an event was being fired.
//!
//! Both provide `as_label`/`as_message` helpers for logs and metrics.
//! Teardown-style operations (`unsubscribe`, `clear`, `fire` on unknown types) never fail.

use thiserror::Error;

use crate::events::EventType;

/// Subscription attempted on an event type that was never declared.
///
/// Signals a declare-before-subscribe ordering bug at the call site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("event type \"{event}\" has not been declared")]
pub struct UndeclaredEventError {
    /// The normalized event type.
    pub event: EventType,
}

impl UndeclaredEventError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventhub::{EventType, UndeclaredEventError};
    ///
    /// let err = UndeclaredEventError { event: EventType::new("never_declared") };
    /// assert_eq!(err.as_label(), "event_undeclared");
    /// ```
    pub fn as_label(&self) -> &'static str {
        "event_undeclared"
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        format!("undeclared event: {}", self.event)
    }
}

/// # Errors produced while firing an event.
///
/// Dispatch stops at the first failing handler; handlers registered after it are not invoked.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A handler returned an error.
    #[error("handler {handler:?} failed on \"{event}\": {source}")]
    Handler {
        /// Event being fired.
        event: EventType,
        /// Name of the failing handler.
        handler: String,
        /// Zero-based position of the failing subscription.
        index: usize,
        /// The handler's error.
        source: anyhow::Error,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Handler { .. } => "dispatch_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::Handler {
                event,
                handler,
                index,
                source,
            } => format!("event={event} handler={handler} index={index}: {source}"),
        }
    }

    /// Event whose dispatch was aborted.
    pub fn event(&self) -> &EventType {
        match self {
            DispatchError::Handler { event, .. } => event,
        }
    }
}
