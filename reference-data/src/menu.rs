//! Menu table: ordered list of dishes with prices, loaded once from a JSON array.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{DataError, Result};

/// One dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Price in złoty.
    pub price: f64,
}

/// Ordered menu. Items keep the document order of the source JSON array so
/// replies list dishes the way the table does. Immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Loads the menu from a JSON file shaped `[{"name": ..., "price": ...}, ...]`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let menu: Menu = serde_json::from_str(&text).map_err(|source| DataError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        info!(
            path = %path.display(),
            items = menu.len(),
            "step: menu loaded"
        );
        Ok(menu)
    }

    /// Items in table order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<MenuItem> for Menu {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
