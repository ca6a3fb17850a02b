//! Set-address action: takes the latest message text as the delivery address.

use async_trait::async_trait;
use obot_core::{slots, Action, CollectingDispatcher, Event, Result, Tracker};
use tracing::{info, instrument};

/// Accepts the raw message text as the delivery address, confirms it, and
/// emits the address slot delta. Any text is accepted; each invocation
/// overwrites whatever address was set before.
pub struct SetAddressAction;

impl SetAddressAction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SetAddressAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for SetAddressAction {
    fn name(&self) -> &'static str {
        "action_set_address"
    }

    #[instrument(skip(self, dispatcher, tracker))]
    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>> {
        let address = tracker.latest_message.text.clone();

        info!(
            sender_id = %tracker.sender_id,
            address_len = address.len(),
            "step: set address"
        );

        dispatcher.utter_message(format!("Adres dostawy ustawiony na: {}", address));
        Ok(vec![Event::slot_set(slots::ADDRESS, address)])
    }
}
