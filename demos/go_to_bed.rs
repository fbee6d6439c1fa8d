//! # Example: go_to_bed
//!
//! Declares an event, subscribes a scoped handler, a delegate and the built-in printer,
//! then fires the event.
//!
//! Demonstrates how to:
//! - Declare an event type and subscribe to it with a different letter case.
//! - Read the scope and arguments from a [`Call`].
//! - Bind leading arguments with [`EventHub::create_delegate`].
//! - Print every invocation with [`LogWriter`].
//!
//! ## Flow
//! ```text
//! declare("go_to_bed")
//!   ├─► subscribe("GO_TO_BED", remind, scope="coder")
//!   ├─► subscribe("go_to_bed", delegate(remind, "manager", ["tonight"]))
//!   ├─► subscribe("go_to_bed", LogWriter)
//!   └─► fire("go_to_bed", ["goal", 12])
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventhub=debug cargo run --example go_to_bed --features logging
//! ```

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use eventhub::{Call, EventHub, HandlerFn, HandlerRef, LogWriter, ScopeRef};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let hub = EventHub::new();
    hub.declare(["go_to_bed"]);

    let remind: HandlerRef = HandlerFn::arc("remind", |call: &Call<'_>| {
        let who = call.scope::<String>().map(String::as_str).unwrap_or("someone");
        let words: Vec<String> = call.args.iter().map(ToString::to_string).collect();
        println!("{who} must go to bed: {}", words.join(" "));
        Ok(())
    });

    let coder: ScopeRef = Arc::new(String::from("coder"));
    let manager: ScopeRef = Arc::new(String::from("manager"));
    let tonight = EventHub::create_delegate(Arc::clone(&remind), Some(manager), vec![json!("tonight")]);

    hub.subscribe("GO_TO_BED", Some(remind), Some(coder))?
        .subscribe("go_to_bed", Some(tonight), None)?
        .subscribe("go_to_bed", Some(Arc::new(LogWriter::new())), None)?;

    hub.fire("go_to_bed", &[json!("goal"), json!(12)])?;
    Ok(())
}
