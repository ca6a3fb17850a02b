//! Show-menu action: lists every dish and its price from the menu table.

use async_trait::async_trait;
use obot_core::{Action, CollectingDispatcher, Event, Result, Tracker};
use reference_data::ReferenceData;
use std::sync::Arc;
use tracing::{info, instrument};

/// Replies with a fixed header plus one "name — price zł" line per menu item,
/// in table order. Reads nothing from the tracker and emits no events.
pub struct ShowMenuAction {
    data: Arc<ReferenceData>,
}

impl ShowMenuAction {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl Action for ShowMenuAction {
    fn name(&self) -> &'static str {
        "action_show_menu"
    }

    #[instrument(skip(self, dispatcher, tracker))]
    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>> {
        info!(
            sender_id = %tracker.sender_id,
            items = self.data.menu.len(),
            "step: show menu"
        );

        let lines = self
            .data
            .menu
            .iter()
            .map(|item| format!("{} — {} zł", item.name, item.price))
            .collect::<Vec<_>>()
            .join("\n");
        dispatcher.utter_message(format!("Nasze menu:\n{}", lines));

        Ok(vec![])
    }
}
