//! # Actions for the ordering bot
//!
//! This crate provides the five custom actions: show hours, show menu,
//! add to order, set address, and summarize order.

mod add_to_order;
mod set_address;
mod show_hours;
mod show_menu;
mod summarize_order;

#[cfg(test)]
mod test;

pub use add_to_order::AddToOrderAction;
pub use set_address::SetAddressAction;
pub use show_hours::ShowHoursAction;
pub use show_menu::ShowMenuAction;
pub use summarize_order::SummarizeOrderAction;
