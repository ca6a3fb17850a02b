//! Add-to-order action: appends the extracted dish to the order slot.

use async_trait::async_trait;
use obot_core::{slots, Action, CollectingDispatcher, Event, Result, Tracker};
use serde_json::json;
use tracing::{info, instrument};

/// Entity name the upstream NLU uses for dish mentions.
const DISH_ENTITY: &str = "dish";

/// Appends the extracted `dish` entity to the order and confirms it; when no
/// dish was extracted, replies that the name was not understood and emits no
/// events. Dish names are taken as-is: no validation against the menu, so
/// duplicates and unknown dishes are allowed.
pub struct AddToOrderAction;

impl AddToOrderAction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddToOrderAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for AddToOrderAction {
    fn name(&self) -> &'static str {
        "action_add_to_order"
    }

    #[instrument(skip(self, dispatcher, tracker))]
    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>> {
        let dish = tracker.latest_entity(DISH_ENTITY);

        let Some(dish) = dish else {
            info!(
                sender_id = %tracker.sender_id,
                "step: add to order, no dish entity extracted"
            );
            dispatcher.utter_message("Nie rozumiem nazwy dania.");
            return Ok(vec![]);
        };

        let mut order = tracker.order();
        order.push(dish.to_string());

        info!(
            sender_id = %tracker.sender_id,
            dish = %dish,
            order_len = order.len(),
            "step: add to order, dish appended"
        );

        dispatcher.utter_message(format!("Dodałem {} do zamówienia.", dish));
        Ok(vec![Event::slot_set(slots::ORDER, json!(order))])
    }
}
