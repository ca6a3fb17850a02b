//! # Action registry
//!
//! Name→action lookup table built at startup. The host dialogue engine selects a
//! custom action by its name string; the registry runs it with the current tracker
//! and a fresh dispatcher, and hands back the emitted replies and state deltas.

use obot_core::{Action, CollectingDispatcher, Event, ObotError, Result, Tracker};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Outcome of one action invocation: replies to deliver and deltas to apply.
#[derive(Debug)]
pub struct ActionOutcome {
    pub messages: Vec<String>,
    pub events: Vec<Event>,
}

/// Registry of named actions. Built once at startup; shared read-only.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Registers an action under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(mut self, action: Arc<dyn Action>) -> Self {
        let name = action.name();
        debug!(action = %name, "Action registered");
        self.actions.insert(name, action);
        self
    }

    /// Registered action names, sorted for stable listing.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Runs the action registered under `name` for one turn. Unknown names are
    /// a host-contract fault, not a user-facing reply.
    #[instrument(skip(self, tracker))]
    pub async fn run(&self, name: &str, tracker: &Tracker) -> Result<ActionOutcome> {
        info!(
            sender_id = %tracker.sender_id,
            action = %name,
            "step: action dispatch started"
        );

        let action = self
            .actions
            .get(name)
            .ok_or_else(|| ObotError::UnknownAction(name.to_string()))?;

        let mut dispatcher = CollectingDispatcher::new();
        let events = action.run(&mut dispatcher, tracker).await?;
        let messages = dispatcher.into_messages();

        info!(
            sender_id = %tracker.sender_id,
            action = %name,
            message_count = messages.len(),
            event_count = events.len(),
            "step: action dispatch finished"
        );

        Ok(ActionOutcome { messages, events })
    }
}

// Unit/integration tests live in tests/registry_test.rs
