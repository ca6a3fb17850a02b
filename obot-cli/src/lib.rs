//! obot CLI library: config loading and registry assembly, shared with integration tests.

pub mod components;
pub mod config;

pub use components::build_registry;
pub use config::Config;
