//! Core types: tracker view, extracted entities, events, reply dispatcher, and the Action trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Well-known slot names and typed accessors over raw slot values.
pub mod slots {
    use serde_json::Value;

    /// Slot holding the accumulated order: a JSON array of dish-name strings.
    pub const ORDER: &str = "order";
    /// Slot holding the delivery address as free text.
    pub const ADDRESS: &str = "address";

    /// Reads an order slot value as a list of dish names.
    /// Absent, null, or non-array values read as an empty order; non-string
    /// elements are skipped. Dish names are free text, never validated
    /// against the menu (duplicates and unknown dishes are allowed).
    pub fn order_from_value(value: Option<&Value>) -> Vec<String> {
        match value {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Reads an address slot value as a string; absent or non-string reads as unset.
    pub fn address_from_value(value: Option<&Value>) -> Option<String> {
        value.and_then(|v| v.as_str()).map(|s| s.to_string())
    }
}

/// A structured value the upstream NLU extracted from the latest user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type, e.g. "dish".
    pub name: String,
    /// Extracted surface value, e.g. "Pizza Margherita".
    pub value: String,
}

/// The latest user message with its extracted entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    pub text: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Read-only view of one conversation's state, handed to an action per
/// invocation. The host dialogue engine owns the real state; actions never
/// mutate it directly, they propose deltas via [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracker {
    /// Conversation id assigned by the host engine.
    pub sender_id: String,
    pub latest_message: LatestMessage,
    /// Raw slot values keyed by slot name.
    #[serde(default)]
    pub slots: HashMap<String, Value>,
}

impl Tracker {
    /// Creates a tracker with the given sender id, no message, and no slots.
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            latest_message: LatestMessage::default(),
            slots: HashMap::new(),
        }
    }

    /// Raw value of a slot, if set.
    pub fn get_slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    /// Value of the first extracted entity with the given name.
    pub fn latest_entity(&self, name: &str) -> Option<&str> {
        self.latest_message
            .entities
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// The current order slot as dish names (empty when unset).
    pub fn order(&self) -> Vec<String> {
        slots::order_from_value(self.get_slot(slots::ORDER))
    }

    /// The current delivery address, if one was set.
    pub fn address(&self) -> Option<String> {
        slots::address_from_value(self.get_slot(slots::ADDRESS))
    }
}

/// State-delta directive returned by an action for the host engine to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Set slot `name` to `value`.
    SlotSet { name: String, value: Value },
}

impl Event {
    /// Convenience constructor for a slot-set directive.
    pub fn slot_set(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Collects reply texts emitted by an action during one invocation. The host
/// engine drains the collected messages and delivers them over its own
/// transport.
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<String>,
}

impl CollectingDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one reply text for delivery to the user.
    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    /// Replies collected so far, in emission order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the dispatcher and returns the collected replies.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// A named custom action invoked by the host dialogue engine once per
/// conversational turn. Actions read the tracker, emit replies through the
/// dispatcher, and return zero or more state deltas. Soft failures
/// (unrecognized dish, incomplete order) are ordinary replies, not errors.
#[async_trait]
pub trait Action: Send + Sync {
    /// Unique name the host engine uses to select this action.
    fn name(&self) -> &'static str;

    /// Runs the action for one turn.
    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> crate::error::Result<Vec<Event>>;
}
