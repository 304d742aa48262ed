use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Closed set of monster classifications used for kill counting
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MonsterCategory {
    Normal,
    Champion,
    Unique,
    SuperUnique,
    Minion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpse {
    pub unit_id: u32,
    pub position: Position,
    pub category: MonsterCategory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ItemQuality {
    Normal,
    Superior,
    Magic,
    Rare,
    Set,
    Unique,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LocationKind {
    #[default]
    Ground,
    Inventory,
    Belt,
    Cube,
    Cursor,
    Stash,
    Equipped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLocation {
    pub kind: LocationKind,
    #[serde(default)]
    pub page: u32,
}

/// One item as reported by the snapshot source, wherever it currently is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotItem {
    /// Raw internal name, e.g. `ShortBow`
    pub name: String,
    pub quality: ItemQuality,
    pub ethereal: bool,
    pub identified: bool,
    pub level_req: u32,
    pub location: ItemLocation,
    pub position: Position,
    pub has_sockets: bool,
    pub sockets: Vec<SnapshotItem>,
    pub is_runeword: bool,
    pub runeword_name: String,
    pub is_named: bool,
    pub identified_name: String,
}

impl SnapshotItem {
    /// Identity of a physical item slot across two consecutive snapshots
    pub fn key(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.name, self.location.kind, self.location.page, self.position.x, self.position.y
        )
    }

    pub fn is_on_ground(&self) -> bool {
        !self.name.is_empty() && self.location.kind == LocationKind::Ground
    }

    /// Inventory, belt and cube count as carried; the cursor does not.
    pub fn is_carried(&self) -> bool {
        !self.name.is_empty()
            && matches!(
                self.location.kind,
                LocationKind::Inventory | LocationKind::Belt | LocationKind::Cube
            )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub level: u32,
    pub experience: u64,
    pub class_id: u8,
}

/// Full point-in-time read of the observed world state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub in_game: bool,
    /// Zero while the player is not inside a world area
    pub area: u32,
    pub player: PlayerStats,
    pub corpses: Vec<Corpse>,
    pub items: Vec<SnapshotItem>,
}

impl Snapshot {
    pub fn in_world(&self) -> bool {
        self.area != 0
    }

    pub fn ground_items(&self) -> impl Iterator<Item = &SnapshotItem> {
        self.items.iter().filter(|item| item.is_on_ground())
    }

    pub fn carried_items(&self) -> impl Iterator<Item = &SnapshotItem> {
        self.items.iter().filter(|item| item.is_carried())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, kind: LocationKind) -> SnapshotItem {
        SnapshotItem {
            name: name.to_string(),
            location: ItemLocation { kind, page: 0 },
            position: Position::new(3, 4),
            ..SnapshotItem::default()
        }
    }

    #[test]
    fn key_includes_location_and_position() {
        let bow = item("ShortBow", LocationKind::Inventory);
        assert_eq!(bow.key(), "ShortBow_inventory_0_3_4");

        let dropped = item("ShortBow", LocationKind::Ground);
        assert_ne!(bow.key(), dropped.key());
    }

    #[test]
    fn partitions_items_by_location() {
        let snapshot = Snapshot {
            in_game: true,
            area: 1,
            items: vec![
                item("Gold", LocationKind::Ground),
                item("ShortBow", LocationKind::Inventory),
                item("MinorHealingPotion", LocationKind::Belt),
                item("Ring", LocationKind::Cube),
                item("Amulet", LocationKind::Cursor),
                item("Shako", LocationKind::Stash),
                item("", LocationKind::Ground),
            ],
            ..Snapshot::default()
        };

        let ground: Vec<_> = snapshot.ground_items().map(|i| i.name.as_str()).collect();
        let carried: Vec<_> = snapshot.carried_items().map(|i| i.name.as_str()).collect();

        assert_eq!(ground, vec!["Gold"]);
        assert_eq!(carried, vec!["ShortBow", "MinorHealingPotion", "Ring"]);
    }

    #[test]
    fn deserializes_sparse_replay_lines() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"in_game":true,"area":2,"corpses":[{"unit_id":7,"position":{"x":1,"y":2},"category":"super_unique"}]}"#,
        )
        .unwrap();

        assert!(snapshot.in_game);
        assert_eq!(snapshot.corpses[0].category, MonsterCategory::SuperUnique);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.player, PlayerStats::default());
    }
}
