//! # Example: composed_host
//!
//! A host type gains events by composing an [`EventHub`] and implementing [`Observable`].
//!
//! The `Thermostat` declares `changed`, a display subscribes to it, and every `set` fires
//! the new temperature. Setting a value outside the allowed range makes the display handler
//! fail, which aborts the fire and surfaces as a [`DispatchError`](eventhub::DispatchError).
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventhub=trace cargo run --example composed_host
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use eventhub::{Call, EventHub, HandlerFn, HandlerRef, Observable};

struct Thermostat {
    events: EventHub,
    celsius: AtomicI64,
}

impl Thermostat {
    fn new() -> Self {
        let me = Self {
            events: EventHub::new(),
            celsius: AtomicI64::new(20),
        };
        me.declare(["changed"]);
        me
    }

    fn set(&self, celsius: i64) -> Result<(), eventhub::DispatchError> {
        let previous = self.celsius.swap(celsius, Ordering::SeqCst);
        self.fire("changed", &[json!(previous), json!(celsius)])?;
        Ok(())
    }
}

impl Observable for Thermostat {
    fn hub(&self) -> &EventHub {
        &self.events
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let thermostat = Thermostat::new();

    let display: HandlerRef = HandlerFn::arc("display", |call: &Call<'_>| {
        let to = call.arg(1).and_then(Value::as_i64).unwrap_or_default();
        if !(-30..=60).contains(&to) {
            anyhow::bail!("{to}°C is out of range");
        }
        println!("{} °C → {to} °C", call.arg(0).unwrap_or(&Value::Null));
        Ok(())
    });
    thermostat.subscribe("Changed", Some(Arc::clone(&display)), None)?;

    thermostat.set(22)?;
    thermostat.set(19)?;
    if let Err(err) = thermostat.set(90) {
        println!("rejected: {}", err.as_message());
    }

    thermostat.unsubscribe("changed", Some(&display));
    thermostat.set(90)?;
    println!("unobserved set accepted");
    Ok(())
}
