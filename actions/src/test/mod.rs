//! Unit tests for the five ordering actions.

mod show_hours_test;

use obot_core::{Entity, LatestMessage, Tracker};
use reference_data::{Menu, MenuItem, OpeningHours, ReferenceData};
use serde_json::Value;
use std::sync::Arc;

/// Reference tables used across the action tests.
pub(crate) fn sample_data() -> Arc<ReferenceData> {
    let hours: OpeningHours = vec![
        ("poniedziałek".to_string(), "10:00-22:00".to_string()),
        ("wtorek".to_string(), "10:00-22:00".to_string()),
        ("niedziela".to_string(), "12:00-20:00".to_string()),
    ]
    .into_iter()
    .collect();

    let menu: Menu = vec![
        MenuItem {
            name: "Pizza Margherita".to_string(),
            price: 25.0,
        },
        MenuItem {
            name: "Cola".to_string(),
            price: 6.5,
        },
    ]
    .into_iter()
    .collect();

    Arc::new(ReferenceData { hours, menu })
}

/// Tracker with the given message text, extracted entities, and slots.
pub(crate) fn sample_tracker(
    text: &str,
    entities: Vec<(&str, &str)>,
    slot_pairs: Vec<(&str, Value)>,
) -> Tracker {
    let mut tracker = Tracker::new("conv-1");
    tracker.latest_message = LatestMessage {
        text: text.to_string(),
        entities: entities
            .into_iter()
            .map(|(name, value)| Entity {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
    };
    for (name, value) in slot_pairs {
        tracker.slots.insert(name.to_string(), value);
    }
    tracker
}
