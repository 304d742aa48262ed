use tracing::debug;

/// Names dropped outright when filtering is enabled
const EXACT_NAMES: &[&str] = &[
    "SuperHealingPotion",
    "GreaterHealingPotion",
    "SuperManaPotion",
    "GreaterManaPotion",
    "RejuvenationPotion",
    "FullRejuvenationPotion",
    "MinorRejuvenationPotion",
    "MinorHealingPotion",
    "LightHealingPotion",
    "MinorManaPotion",
    "LightManaPotion",
    "AntidotePotion",
    "ThawingPotion",
    "StaminaPotion",
    "Arrow",
    "Arrows",
    "Bolt",
    "Bolts",
    "Pfeil",
    "Pfeile",
    "Bolzen",
    "Gold",
];

/// Lowercase fragments; any display name containing one is a consumable
const PATTERNS: &[&str] = &[
    "healingpotion",
    "healthpotion",
    "healing potion",
    "health potion",
    "manapotion",
    "mana potion",
    "rejuvenationpotion",
    "rejuvenation potion",
    "antidotepotion",
    "antidote potion",
    "thawingpotion",
    "thawing potion",
    "staminapotion",
    "stamina potion",
    "arrow",
    "bolt",
    "pfeil",
    "bolzen",
    "gold",
];

const CATEGORIES: &[&str] = &[
    "Healing Potions (all types)",
    "Mana Potions (all types)",
    "Rejuvenation Potions (all types)",
    "Antidote Potions",
    "Thawing Potions",
    "Stamina Potions",
    "Arrows",
    "Bolts",
    "Gold",
];

/// Decides whether a picked-up item is a consumable not worth logging
#[derive(Debug, Clone)]
pub struct ConsumableFilter {
    exact: Vec<String>,
    patterns: Vec<String>,
}

impl Default for ConsumableFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsumableFilter {
    pub fn new() -> Self {
        Self {
            exact: EXACT_NAMES.iter().map(|s| s.to_string()).collect(),
            patterns: PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Adds an extra lowercase substring pattern
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns.push(pattern.to_lowercase());
        self
    }

    pub fn is_filtered(&self, item_name: &str) -> bool {
        if self.exact.iter().any(|exact| exact == item_name) {
            debug!(item = %item_name, "Exact consumable match");
            return true;
        }

        let lowered = item_name.to_lowercase();
        match self.patterns.iter().find(|p| lowered.contains(p.as_str())) {
            Some(pattern) => {
                debug!(item = %item_name, pattern = %pattern, "Consumable pattern match");
                true
            }
            None => false,
        }
    }

    /// Human readable list of what the filter drops
    pub fn categories() -> Vec<String> {
        CATEGORIES.iter().map(|s| s.to_string()).collect()
    }
}
