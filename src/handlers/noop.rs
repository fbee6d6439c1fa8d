//! Inert handler used in place of placeholder subscriptions.

use std::sync::{Arc, OnceLock};

use super::call::Call;
use super::handler::{Handler, HandlerRef, HandlerResult};

/// Handler that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Noop;

impl Noop {
    /// Process-wide shared instance.
    pub fn shared() -> HandlerRef {
        static NOOP: OnceLock<HandlerRef> = OnceLock::new();
        Arc::clone(NOOP.get_or_init(|| Arc::new(Noop) as HandlerRef))
    }
}

impl Handler for Noop {
    fn call(&self, _call: &Call<'_>) -> HandlerResult {
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
