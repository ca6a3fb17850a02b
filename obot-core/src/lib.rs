//! # obot-core
//!
//! Core types and traits for the ordering-bot action handlers: the [`Action`] trait,
//! [`Tracker`] state view, [`Event`] deltas, [`CollectingDispatcher`], error types,
//! and tracing initialization. Host-engine agnostic; used by actions and action-registry.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ObotError, Result};
pub use logger::init_tracing;
pub use types::{
    slots, Action, CollectingDispatcher, Entity, Event, LatestMessage, Tracker,
};

#[cfg(test)]
mod test;
