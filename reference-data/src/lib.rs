//! Reference-data crate: the two immutable tables the ordering actions read.
//!
//! ## Modules
//!
//! - [`error`] – DataError for load faults
//! - [`hours`] – OpeningHours, DayHours
//! - [`menu`] – Menu, MenuItem
//!
//! Both tables are loaded once at process start and shared read-only (via
//! `Arc`) across all conversations; nothing here mutates them afterwards.

mod error;
mod hours;
mod menu;


use std::path::Path;

pub use error::{DataError, Result};
pub use hours::{DayHours, OpeningHours};
pub use menu::{Menu, MenuItem};

/// Both reference tables, loaded together at startup.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub hours: OpeningHours,
    pub menu: Menu,
}

impl ReferenceData {
    /// Loads both tables; any fault is fatal to startup.
    pub fn load(hours_path: impl AsRef<Path>, menu_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            hours: OpeningHours::load(hours_path)?,
            menu: Menu::load(menu_path)?,
        })
    }
}
