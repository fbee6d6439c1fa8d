//! # LogWriter: simple fire printer
//!
//! A minimal handler that prints every invocation to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [fired] event="go_to_bed" receiver=Scope args=["goal",12]
//! [fired] event="tick" receiver=Hub args=[]
//! [invoked] receiver=Unbound args=["a","b"]
//! ```

use serde_json::Value;

use super::call::Call;
use super::handler::{Handler, HandlerResult};

/// Invocation printer.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render(call: &Call<'_>) -> String {
        let args = Value::Array(call.args.to_vec());
        match call.event {
            Some(event) => format!(
                "[fired] event={:?} receiver={:?} args={}",
                event.as_str(),
                call.receiver,
                args
            ),
            None => format!("[invoked] receiver={:?} args={}", call.receiver, args),
        }
    }
}

impl Handler for LogWriter {
    fn call(&self, call: &Call<'_>) -> HandlerResult {
        println!("{}", Self::render(call));
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
