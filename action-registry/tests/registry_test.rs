//! Integration tests for [`action_registry::ActionRegistry`].
//!
//! Covers: dispatch by name collects replies and events, unknown names are an
//! error, a later registration with the same name replaces the earlier one,
//! and names() lists registered actions sorted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use action_registry::ActionRegistry;
use obot_core::{Action, CollectingDispatcher, Event, ObotError, Tracker};
use serde_json::json;

struct CountingAction {
    name: &'static str,
    reply: &'static str,
    run_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Action for CountingAction {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        _tracker: &Tracker,
    ) -> obot_core::Result<Vec<Event>> {
        self.run_count.fetch_add(1, Ordering::SeqCst);
        dispatcher.utter_message(self.reply);
        Ok(vec![Event::slot_set("last_action", self.name)])
    }
}

/// **Test: Dispatch by name runs the matching action and collects its output.**
///
/// **Setup:** Two actions registered under different names.
/// **Action:** `registry.run("action_b", &tracker)`.
/// **Expected:** Only action_b ran; outcome carries its reply and its event.
#[tokio::test]
async fn test_dispatch_runs_matching_action_only() {
    let a_count = Arc::new(AtomicUsize::new(0));
    let b_count = Arc::new(AtomicUsize::new(0));

    let registry = ActionRegistry::new()
        .register(Arc::new(CountingAction {
            name: "action_a",
            reply: "reply a",
            run_count: a_count.clone(),
        }))
        .register(Arc::new(CountingAction {
            name: "action_b",
            reply: "reply b",
            run_count: b_count.clone(),
        }));

    let tracker = Tracker::new("conv-1");
    let outcome = registry.run("action_b", &tracker).await.unwrap();

    assert_eq!(a_count.load(Ordering::SeqCst), 0);
    assert_eq!(b_count.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.messages, vec!["reply b"]);
    assert_eq!(
        outcome.events,
        vec![Event::slot_set("last_action", "action_b")]
    );
}

/// **Test: Unknown action name yields ObotError::UnknownAction.**
#[tokio::test]
async fn test_unknown_action_is_error() {
    let registry = ActionRegistry::new();
    let tracker = Tracker::new("conv-1");

    let result = registry.run("action_missing", &tracker).await;
    assert!(matches!(
        result.unwrap_err(),
        ObotError::UnknownAction(name) if name == "action_missing"
    ));
}

/// **Test: Re-registering a name replaces the earlier action.**
#[tokio::test]
async fn test_later_registration_replaces_earlier() {
    let first_count = Arc::new(AtomicUsize::new(0));
    let second_count = Arc::new(AtomicUsize::new(0));

    let registry = ActionRegistry::new()
        .register(Arc::new(CountingAction {
            name: "action_dup",
            reply: "first",
            run_count: first_count.clone(),
        }))
        .register(Arc::new(CountingAction {
            name: "action_dup",
            reply: "second",
            run_count: second_count.clone(),
        }));

    let tracker = Tracker::new("conv-1");
    let outcome = registry.run("action_dup", &tracker).await.unwrap();

    assert_eq!(first_count.load(Ordering::SeqCst), 0);
    assert_eq!(second_count.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.messages, vec!["second"]);
}

/// **Test: names() lists registered actions sorted.**
#[tokio::test]
async fn test_names_sorted() {
    let registry = ActionRegistry::new()
        .register(Arc::new(CountingAction {
            name: "action_b",
            reply: "b",
            run_count: Arc::new(AtomicUsize::new(0)),
        }))
        .register(Arc::new(CountingAction {
            name: "action_a",
            reply: "a",
            run_count: Arc::new(AtomicUsize::new(0)),
        }));

    assert_eq!(registry.names(), vec!["action_a", "action_b"]);
}

/// **Test: Tracker slots are visible to the action through the dispatch path.**
#[tokio::test]
async fn test_tracker_passed_through() {
    struct SlotEchoAction;

    #[async_trait::async_trait]
    impl Action for SlotEchoAction {
        fn name(&self) -> &'static str {
            "action_echo"
        }

        async fn run(
            &self,
            dispatcher: &mut CollectingDispatcher,
            tracker: &Tracker,
        ) -> obot_core::Result<Vec<Event>> {
            dispatcher.utter_message(format!("order has {} items", tracker.order().len()));
            Ok(vec![])
        }
    }

    let registry = ActionRegistry::new().register(Arc::new(SlotEchoAction));

    let mut tracker = Tracker::new("conv-1");
    tracker
        .slots
        .insert("order".to_string(), json!(["Pizza", "Cola"]));

    let outcome = registry.run("action_echo", &tracker).await.unwrap();
    assert_eq!(outcome.messages, vec!["order has 2 items"]);
    assert!(outcome.events.is_empty());
}
