//! Summarize-order action: itemizes the order and the delivery address.

use async_trait::async_trait;
use obot_core::{Action, CollectingDispatcher, Event, Result, Tracker};
use tracing::{info, instrument};

/// Read-only summary of the conversation's order. When the order is empty or
/// the address is unset, replies with a missing-information message instead.
/// Never emits events.
pub struct SummarizeOrderAction;

impl SummarizeOrderAction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummarizeOrderAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for SummarizeOrderAction {
    fn name(&self) -> &'static str {
        "action_summarize_order"
    }

    #[instrument(skip(self, dispatcher, tracker))]
    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>> {
        let order = tracker.order();
        let address = tracker.address();

        let Some(address) = address.filter(|_| !order.is_empty()) else {
            info!(
                sender_id = %tracker.sender_id,
                order_len = order.len(),
                "step: summarize order, order or address missing"
            );
            dispatcher.utter_message("Brakuje pozycji w zamówieniu lub adresu.");
            return Ok(vec![]);
        };

        info!(
            sender_id = %tracker.sender_id,
            order_len = order.len(),
            "step: summarize order"
        );

        let items = order
            .iter()
            .map(|dish| format!("- {}", dish))
            .collect::<Vec<_>>()
            .join("\n");
        dispatcher.utter_message(format!(
            "Twoje zamówienie:\n{}\n\nDostawa na: {}",
            items, address
        ));

        Ok(vec![])
    }
}
