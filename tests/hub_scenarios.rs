//! End-to-end behaviour of `EventHub` through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak, mpsc};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::{Value, json};

use eventhub::{
    Call, DispatchError, EventHub, EventType, Handler, HandlerFn, HandlerRef, HandlerResult,
    Observable, ScopeRef,
};

#[derive(Debug, Clone, PartialEq)]
struct Invocation {
    handler: &'static str,
    event: Option<String>,
    scope: Option<String>,
    args: Vec<Value>,
}

type Journal = Arc<Mutex<Vec<Invocation>>>;

fn recorder(name: &'static str, journal: &Journal) -> HandlerRef {
    let journal = Arc::clone(journal);
    HandlerFn::arc(name, move |call: &Call<'_>| {
        journal.lock().push(Invocation {
            handler: name,
            event: call.event.map(|e| e.to_string()),
            scope: call.scope::<String>().cloned(),
            args: call.args.to_vec(),
        });
        Ok(())
    })
}

fn handlers_seen(journal: &Journal) -> Vec<&'static str> {
    journal.lock().iter().map(|i| i.handler).collect()
}

#[test]
fn go_to_bed_reaches_scoped_handler() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let scope: ScopeRef = Arc::new(String::from("coder"));

    hub.declare(["go_to_bed"]);
    hub.subscribe("GO_TO_BED", Some(recorder("h", &journal)), Some(scope))
        .unwrap();
    hub.fire("go_to_bed", &[json!("goal"), json!(12)]).unwrap();

    assert_eq!(
        *journal.lock(),
        vec![Invocation {
            handler: "h",
            event: Some("go_to_bed".into()),
            scope: Some("coder".into()),
            args: vec![json!("goal"), json!(12)],
        }]
    );
}

#[test]
fn subscribe_requires_declaration() {
    let hub = EventHub::new();
    let journal = Journal::default();

    let err = hub
        .subscribe("never_declared", Some(recorder("h", &journal)), None)
        .unwrap_err();
    assert_eq!(err.event, EventType::new("never_declared"));
    assert_eq!(err.as_label(), "event_undeclared");
    assert!(hub.event_types().is_empty());

    hub.declare(["never_declared"]);
    assert!(
        hub.subscribe("never_declared", Some(recorder("h", &journal)), None)
            .is_ok()
    );
}

#[test]
fn every_registration_fires_once_in_order() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let same = recorder("same", &journal);

    hub.declare(["tick"]);
    hub.subscribe("tick", Some(recorder("first", &journal)), None)
        .unwrap();
    for _ in 0..3 {
        hub.subscribe("tick", Some(Arc::clone(&same)), None).unwrap();
    }
    hub.subscribe("tick", Some(recorder("last", &journal)), None)
        .unwrap();

    hub.fire("tick", &[]).unwrap();
    assert_eq!(
        handlers_seen(&journal),
        ["first", "same", "same", "same", "last"]
    );
}

#[test]
fn unsubscribe_removes_first_occurrence_only() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let h1 = recorder("h1", &journal);
    let h2 = recorder("h2", &journal);

    hub.declare(["x"]);
    for h in [&h1, &h2, &h1] {
        hub.subscribe("x", Some(Arc::clone(h)), None).unwrap();
    }

    hub.unsubscribe("x", Some(&h1));
    hub.fire("x", &[json!(5)]).unwrap();

    assert_eq!(handlers_seen(&journal), ["h2", "h1"]);
}

#[test]
fn unsubscribe_then_fire_skips_removed_handler() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let h1 = recorder("h1", &journal);
    let h2 = recorder("h2", &journal);

    hub.declare(["x"]);
    hub.subscribe("x", Some(h1.clone()), None).unwrap();
    hub.subscribe("x", Some(h2), None).unwrap();
    hub.unsubscribe("x", Some(&h1));
    hub.fire("x", &[json!(5)]).unwrap();

    let journal = journal.lock();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].handler, "h2");
    assert_eq!(journal[0].args, vec![json!(5)]);
}

#[test]
fn unsubscribe_matches_by_identity_not_name() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let registered = recorder("twin", &journal);
    let lookalike = recorder("twin", &journal);

    hub.declare(["x"]);
    hub.subscribe("x", Some(registered), None).unwrap();
    hub.unsubscribe("x", Some(&lookalike));

    assert_eq!(hub.subscriber_count("x"), Some(1));
}

#[test]
fn teardown_operations_are_lenient() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let h = recorder("h", &journal);

    hub.unsubscribe("ghost", Some(&h))
        .clear("ghost")
        .fire("ghost", &[json!(1)])
        .unwrap();

    hub.declare(["x"]);
    hub.unsubscribe("x", Some(&h));
    hub.subscribe("x", Some(h), None).unwrap();
    hub.clear("x").fire("x", &[]).unwrap();

    assert!(journal.lock().is_empty());
    assert!(!hub.is_declared("ghost"));
    assert_eq!(hub.subscriber_count("x"), Some(0));
}

#[test]
fn cleared_type_behaves_like_fresh_declaration() {
    let run = |hub: &EventHub, journal: &Journal| {
        hub.subscribe("x", Some(recorder("h", journal)), None)
            .unwrap()
            .fire("x", &[json!("v")])
            .unwrap();
    };

    let fresh = EventHub::new();
    let fresh_journal = Journal::default();
    fresh.declare(["x"]);
    run(&fresh, &fresh_journal);

    let reused = EventHub::new();
    let reused_journal = Journal::default();
    reused.declare(["x"]);
    reused
        .subscribe("x", Some(recorder("old", &reused_journal)), None)
        .unwrap();
    reused.clear("x");
    run(&reused, &reused_journal);

    assert_eq!(*fresh_journal.lock(), *reused_journal.lock());
}

#[test]
fn delegate_prepends_bound_args() {
    let journal = Journal::default();
    let obj: ScopeRef = Arc::new(String::from("obj"));
    let delegate = EventHub::create_delegate(recorder("f", &journal), Some(obj), vec![json!("a")]);

    let hub = EventHub::new();
    hub.declare(["later"]);
    hub.subscribe("later", Some(delegate), None).unwrap();
    hub.fire("later", &[json!("b")]).unwrap();

    let journal = journal.lock();
    assert_eq!(journal[0].scope.as_deref(), Some("obj"));
    assert_eq!(journal[0].args, vec![json!("a"), json!("b")]);
    assert_eq!(journal[0].event.as_deref(), Some("later"));
}

#[test]
fn failing_handler_aborts_remaining_dispatch() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let failing: HandlerRef =
        HandlerFn::arc("failing", |_: &Call<'_>| Err(anyhow::anyhow!("disk full")));

    hub.declare(["save"]);
    hub.subscribe("save", Some(recorder("before", &journal)), None)
        .unwrap();
    hub.subscribe("save", Some(failing), None).unwrap();
    hub.subscribe("save", Some(recorder("after", &journal)), None)
        .unwrap();

    match hub.fire("save", &[]) {
        Err(err @ DispatchError::Handler { .. }) => {
            assert_eq!(err.event().as_str(), "save");
            assert!(err.to_string().contains("disk full"));
        }
        other => panic!("expected handler failure, got {other:?}"),
    }
    assert_eq!(handlers_seen(&journal), ["before"]);
}

#[test]
fn handler_can_unsubscribe_itself_during_fire() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let slot: Arc<Mutex<Option<HandlerRef>>> = Arc::default();

    let me = Arc::clone(&slot);
    let once: HandlerRef = HandlerFn::arc("once", move |call: &Call<'_>| {
        if let (Some(hub), Some(this)) = (call.hub(), me.lock().clone()) {
            hub.unsubscribe("x", Some(&this));
        }
        Ok(())
    });
    *slot.lock() = Some(Arc::clone(&once));

    hub.declare(["x"]);
    hub.subscribe("x", Some(once), None).unwrap();
    hub.subscribe("x", Some(recorder("stays", &journal)), None)
        .unwrap();

    hub.fire("x", &[]).unwrap();
    assert_eq!(hub.subscriber_count("x"), Some(1));

    hub.fire("x", &[]).unwrap();
    assert_eq!(handlers_seen(&journal), ["stays", "stays"]);
}

#[test]
fn subscriptions_added_during_fire_wait_for_next_fire() {
    let hub = EventHub::new();
    let journal = Journal::default();
    let late = recorder("late", &journal);

    let adder = HandlerFn::arc("adder", move |call: &Call<'_>| {
        if let Some(hub) = call.hub() {
            hub.subscribe("x", Some(Arc::clone(&late)), None)?;
        }
        Ok(())
    });

    hub.declare(["x"]);
    hub.subscribe("x", Some(adder), None).unwrap();

    hub.fire("x", &[]).unwrap();
    assert!(journal.lock().is_empty());

    hub.fire("x", &[]).unwrap();
    assert_eq!(handlers_seen(&journal), ["late"]);
}

#[test]
fn hub_is_shareable_across_threads() {
    let hub = Arc::new(EventHub::new());
    let journal = Journal::default();
    hub.declare(["ping"]);

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let hub = Arc::clone(&hub);
            let journal = Arc::clone(&journal);
            thread::spawn(move || {
                hub.subscribe("ping", Some(recorder("w", &journal)), None)
                    .unwrap();
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    hub.fire("ping", &[]).unwrap();
    assert_eq!(journal.lock().len(), 4);
}

#[test]
fn observable_host_exposes_hub_operations() {
    struct Sleeper {
        events: EventHub,
    }

    impl Observable for Sleeper {
        fn hub(&self) -> &EventHub {
            &self.events
        }
    }

    let journal = Journal::default();
    let sleeper = Sleeper {
        events: EventHub::new(),
    };

    sleeper
        .declare(["Go_To_Bed"])
        .subscribe("go_to_bed", Some(recorder("h", &journal)), None)
        .unwrap()
        .fire("GO_TO_BED", &[json!("goal"), json!(12)])
        .unwrap();

    assert_eq!(handlers_seen(&journal), ["h"]);
}

/// Handler whose destructor reads the hub it was subscribed to.
struct TouchesHubOnDrop {
    hub: Weak<EventHub>,
    drops: Arc<AtomicUsize>,
}

impl Handler for TouchesHubOnDrop {
    fn call(&self, _call: &Call<'_>) -> HandlerResult {
        Ok(())
    }
}

impl Drop for TouchesHubOnDrop {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            let _ = hub.is_declared("x");
        }
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

fn finishes_within(limit: Duration, f: impl FnOnce() + Send + 'static) -> bool {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        f();
        let _ = tx.send(());
    });
    rx.recv_timeout(limit).is_ok()
}

#[test]
fn removed_handlers_are_dropped_outside_the_lock() {
    let hub = Arc::new(EventHub::new());
    let drops = Arc::new(AtomicUsize::new(0));
    hub.declare(["x"]);

    let worker_hub = Arc::clone(&hub);
    let worker_drops = Arc::clone(&drops);
    let finished = finishes_within(Duration::from_secs(3), move || {
        let guarded = |hub: &Arc<EventHub>| -> HandlerRef {
            Arc::new(TouchesHubOnDrop {
                hub: Arc::downgrade(hub),
                drops: Arc::clone(&worker_drops),
            })
        };

        // Rejected subscription: the hub holds the only handle when it gives up.
        assert!(
            worker_hub
                .subscribe("missing", Some(guarded(&worker_hub)), None)
                .is_err()
        );

        // Cleared subscription: the registry holds the only handle.
        worker_hub
            .subscribe("x", Some(guarded(&worker_hub)), None)
            .unwrap();
        worker_hub.clear("x");
    });

    assert!(finished, "hub deadlocked while dropping a removed handler");
    assert_eq!(drops.load(Ordering::SeqCst), 2);
    assert_eq!(hub.subscriber_count("x"), Some(0));
}
