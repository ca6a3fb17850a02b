//! Show-hours action: lists every day and its hours from the opening-hours table.

use async_trait::async_trait;
use obot_core::{Action, CollectingDispatcher, Event, Result, Tracker};
use reference_data::ReferenceData;
use std::sync::Arc;
use tracing::{info, instrument};

/// Replies with one "Day: hours" line per table entry, in table order.
/// Reads nothing from the tracker and emits no events.
pub struct ShowHoursAction {
    data: Arc<ReferenceData>,
}

impl ShowHoursAction {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl Action for ShowHoursAction {
    fn name(&self) -> &'static str {
        "action_show_hours"
    }

    #[instrument(skip(self, dispatcher, tracker))]
    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>> {
        info!(
            sender_id = %tracker.sender_id,
            days = self.data.hours.len(),
            "step: show hours"
        );

        let text = self
            .data
            .hours
            .iter()
            .map(|entry| format!("{}: {}", title_case(&entry.day), entry.hours))
            .collect::<Vec<_>>()
            .join("\n");
        dispatcher.utter_message(text);

        Ok(vec![])
    }
}
