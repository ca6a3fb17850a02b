//! Component factory: builds the action registry from loaded reference data.
//! Isolates assembly logic from the CLI entry point.

use action_registry::ActionRegistry;
use actions::{
    AddToOrderAction, SetAddressAction, ShowHoursAction, ShowMenuAction, SummarizeOrderAction,
};
use reference_data::ReferenceData;
use std::sync::Arc;
use tracing::info;

/// Registers all five ordering actions. The reference tables are shared via
/// `Arc` into the actions that read them.
pub fn build_registry(data: Arc<ReferenceData>) -> ActionRegistry {
    let registry = ActionRegistry::new()
        .register(Arc::new(ShowHoursAction::new(data.clone())))
        .register(Arc::new(ShowMenuAction::new(data)))
        .register(Arc::new(AddToOrderAction::new()))
        .register(Arc::new(SetAddressAction::new()))
        .register(Arc::new(SummarizeOrderAction::new()));

    info!(actions = registry.names().len(), "step: registry built");
    registry
}
