//! # Core hub.
//!
//! ```text
//!   Host (Observable) ──► EventHub ──► Mutex<Registry>
//!                             │            └─ EventType → [Subscription { handler, scope }]
//!                             └─ HubConfig
//! ```
//!
//! - [`EventHub`] public surface (declare, subscribe, unsubscribe, fire, clear)
//! - `Registry` per-type subscriber lists, no locking of its own
//! - [`HubConfig`] hub settings
//! - [`Observable`] forwarding trait for types composing a hub

mod config;
mod hub;
mod observable;
mod registry;

pub use config::HubConfig;
pub use hub::EventHub;
pub use observable::Observable;
