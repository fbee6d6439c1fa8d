//! Event naming.
//!
//! ## Contents
//! - [`EventType`] case-insensitive registry key

mod event_type;

pub use event_type::EventType;
