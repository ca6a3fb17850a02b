//! Opening-hours table: ordered day→hours mapping loaded once from a JSON object.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::info;

use crate::error::{DataError, Result};

/// One day's entry in the opening-hours table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub day: String,
    pub hours: String,
}

/// Ordered day→hours mapping. Entries keep the document order of the source
/// JSON object so replies list days the way the table does. Immutable after
/// load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningHours {
    entries: Vec<DayHours>,
}

impl OpeningHours {
    /// Loads the table from a JSON file shaped `{"monday": "10:00-22:00", ...}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let hours: OpeningHours =
            serde_json::from_str(&text).map_err(|source| DataError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        info!(
            path = %path.display(),
            days = hours.len(),
            "step: opening hours loaded"
        );
        Ok(hours)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &DayHours> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for OpeningHours {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(day, hours)| DayHours { day, hours })
                .collect(),
        }
    }
}

// Serde sees the table as a JSON object; a plain map type would lose document
// order, so deserialization collects entries manually.
impl<'de> Deserialize<'de> for OpeningHours {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HoursVisitor;

        impl<'de> Visitor<'de> for HoursVisitor {
            type Value = OpeningHours;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of day name to hours string")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(7));
                while let Some((day, hours)) = map.next_entry::<String, String>()? {
                    entries.push(DayHours { day, hours });
                }
                Ok(OpeningHours { entries })
            }
        }

        deserializer.deserialize_map(HoursVisitor)
    }
}

impl Serialize for OpeningHours {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.day, &entry.hours)?;
        }
        map.end()
    }
}
