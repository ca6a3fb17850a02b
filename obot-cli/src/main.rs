//! obot CLI: list registered actions or invoke one against a hand-built tracker.
//! Reference tables from JSON files; paths from env (.env supported).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use obot_core::{init_tracing, Entity, LatestMessage, Tracker};
use reference_data::ReferenceData;
use serde_json::Value;
use std::sync::Arc;

use obot_cli::{build_registry, Config};

#[derive(Parser)]
#[command(name = "obot")]
#[command(about = "Ordering-bot action CLI: list-actions, invoke", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered action names.
    ListActions,
    /// Invoke one action with a hand-built tracker and print replies and events.
    Invoke {
        /// Action name, e.g. action_show_menu.
        #[arg(short, long)]
        action: String,
        /// Latest user message text.
        #[arg(short, long, default_value = "")]
        text: String,
        /// Extracted entity as name=value (repeatable), e.g. --entity dish=Pizza.
        #[arg(short, long = "entity")]
        entities: Vec<String>,
        /// Slot as name=json (repeatable), e.g. --slot 'order=["Pizza"]'.
        /// Values that are not valid JSON are taken as plain strings.
        #[arg(short, long = "slot")]
        slots: Vec<String>,
        /// Conversation id for the tracker.
        #[arg(long, default_value = "cli")]
        sender_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load()?;

    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(&config.log_file)?;

    let data = ReferenceData::load(&config.hours_file, &config.menu_file)
        .context("Load reference tables (check HOURS_FILE and MENU_FILE)")?;
    let registry = build_registry(Arc::new(data));

    match cli.command {
        Commands::ListActions => {
            for name in registry.names() {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Invoke {
            action,
            text,
            entities,
            slots,
            sender_id,
        } => {
            let tracker = build_tracker(&sender_id, &text, &entities, &slots)?;
            let outcome = registry.run(&action, &tracker).await?;

            for message in &outcome.messages {
                println!("{}", message);
            }
            if !outcome.events.is_empty() {
                println!("{}", serde_json::to_string_pretty(&outcome.events)?);
            }
            Ok(())
        }
    }
}

/// Builds a tracker from CLI arguments: entities as name=value, slots as name=json.
fn build_tracker(
    sender_id: &str,
    text: &str,
    entities: &[String],
    slots: &[String],
) -> Result<Tracker> {
    let mut tracker = Tracker::new(sender_id);
    tracker.latest_message = LatestMessage {
        text: text.to_string(),
        entities: entities
            .iter()
            .map(|raw| {
                let (name, value) = raw
                    .split_once('=')
                    .with_context(|| format!("Entity must be name=value, got: {}", raw))?;
                Ok(Entity {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?,
    };

    for raw in slots {
        let (name, value) = raw
            .split_once('=')
            .with_context(|| format!("Slot must be name=json, got: {}", raw))?;
        let value = serde_json::from_str::<Value>(value)
            .unwrap_or_else(|_| Value::String(value.to_string()));
        tracker.slots.insert(name.to_string(), value);
    }

    Ok(tracker)
}
