//! Unit tests for ShowHoursAction.

use crate::test::{sample_data, sample_tracker};
use crate::ShowHoursAction;
use obot_core::{Action, CollectingDispatcher};

#[tokio::test]
async fn test_show_hours_one_line_per_day_in_table_order() {
    let action = ShowHoursAction::new(sample_data());
    let tracker = sample_tracker("kiedy otwarte?", vec![], vec![]);
    let mut dispatcher = CollectingDispatcher::new();

    let events = action.run(&mut dispatcher, &tracker).await.unwrap();

    assert!(events.is_empty());
    assert_eq!(dispatcher.messages().len(), 1);
    assert_eq!(
        dispatcher.messages()[0],
        "Poniedziałek: 10:00-22:00\nWtorek: 10:00-22:00\nNiedziela: 12:00-20:00"
    );
}

#[tokio::test]
async fn test_show_hours_name() {
    let action = ShowHoursAction::new(sample_data());
    assert_eq!(action.name(), "action_show_hours");
}
