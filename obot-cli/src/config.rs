use anyhow::Result;
use std::env;

/// Ordering-bot configuration, loaded from environment variables.
pub struct Config {
    /// Path to the opening-hours JSON table.
    pub hours_file: String,
    /// Path to the menu JSON table.
    pub menu_file: String,
    pub log_file: String,
}

impl Config {
    /// Loads configuration from environment variables, with defaults for
    /// every value so a checkout with the bundled data files runs as-is.
    pub fn load() -> Result<Self> {
        let hours_file =
            env::var("HOURS_FILE").unwrap_or_else(|_| "data/opening_hours.json".to_string());
        let menu_file = env::var("MENU_FILE").unwrap_or_else(|_| "data/menu.json".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/obot.log".to_string());

        Ok(Self {
            hours_file,
            menu_file,
            log_file,
        })
    }
}
