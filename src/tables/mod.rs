// Immutable lookup tables shared by the tracker components
//
// Built once at start-up (compiled-in defaults, optionally overridden from a
// JSON file) and handed around as `Arc<StaticTables>`.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::info;

mod defaults;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("Failed to read tables file: {0}")]
    Io(String),

    #[error("Failed to parse tables file: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct StaticTables {
    item_names: HashMap<String, String>,
    area_names: HashMap<u32, String>,
    class_names: HashMap<u8, String>,
    /// Level -> total experience required to reach that level
    level_xp: BTreeMap<u32, u64>,
}

/// On-disk override; any table left out keeps its compiled-in default
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TablesFile {
    item_names: Option<HashMap<String, String>>,
    area_names: Option<HashMap<u32, String>>,
    class_names: Option<HashMap<u8, String>>,
    level_xp: Option<BTreeMap<u32, u64>>,
}

impl Default for StaticTables {
    fn default() -> Self {
        Self {
            item_names: defaults::item_names(),
            area_names: defaults::area_names(),
            class_names: defaults::class_names(),
            level_xp: defaults::level_xp(),
        }
    }
}

impl StaticTables {
    pub fn from_json(text: &str) -> Result<Self, TablesError> {
        let file: TablesFile =
            serde_json::from_str(text).map_err(|e| TablesError::Parse(e.to_string()))?;
        let mut tables = Self::default();

        if let Some(item_names) = file.item_names {
            tables.item_names = item_names;
        }
        if let Some(area_names) = file.area_names {
            tables.area_names = area_names;
        }
        if let Some(class_names) = file.class_names {
            tables.class_names = class_names;
        }
        if let Some(level_xp) = file.level_xp {
            tables.level_xp = level_xp;
        }

        Ok(tables)
    }

    pub fn load(path: &Path) -> Result<Self, TablesError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| TablesError::Io(format!("{}: {}", path.display(), e)))?;
        let tables = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            item_names = tables.item_names.len(),
            area_names = tables.area_names.len(),
            "Loaded static tables"
        );
        Ok(tables)
    }

    /// Human readable item name for a raw internal name
    pub fn display_name(&self, raw_name: &str) -> String {
        if raw_name.is_empty() {
            return "Unknown Item".to_string();
        }
        if let Some(known) = self.item_names.get(raw_name) {
            return known.clone();
        }
        split_camel_case(raw_name)
    }

    pub fn area_name(&self, area: u32) -> String {
        if area == 0 {
            return "Unknown".to_string();
        }
        self.area_names
            .get(&area)
            .cloned()
            .unwrap_or_else(|| format!("Area {}", area))
    }

    pub fn class_name(&self, class_id: u8) -> String {
        self.class_names
            .get(&class_id)
            .cloned()
            .unwrap_or_else(|| format!("Unknown ({})", class_id))
    }

    pub fn total_xp_for_level(&self, level: u32) -> Option<u64> {
        self.level_xp.get(&level).copied()
    }
}

/// "ShortBow" -> "Short Bow", "HPPotion" -> "HP Potion"
fn split_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let word_start = prev.is_ascii_lowercase()
                || (prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase()));
            if word_start {
                result.push(' ');
            }
        }
        result.push(c);
    }

    result
}
