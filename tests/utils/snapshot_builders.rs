use runtracker::snapshot::{
    Corpse, ItemLocation, ItemQuality, LocationKind, MonsterCategory, PlayerStats, Position,
    Snapshot, SnapshotItem,
};

// ============================================================================
// Snapshot Builder
// ============================================================================

/// Fluent construction of snapshots for scripted sessions
#[derive(Clone)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

#[allow(dead_code)]
impl SnapshotBuilder {
    /// Character select / main menu: not in game, no world
    pub fn menu() -> Self {
        Self {
            snapshot: Snapshot::default(),
        }
    }

    /// In game inside the given area
    pub fn in_game(area: u32) -> Self {
        Self {
            snapshot: Snapshot {
                in_game: true,
                area,
                ..Snapshot::default()
            },
        }
    }

    pub fn with_player(mut self, level: u32, experience: u64) -> Self {
        self.snapshot.player = PlayerStats {
            level,
            experience,
            class_id: 1,
        };
        self
    }

    pub fn with_corpse(mut self, unit_id: u32, category: MonsterCategory) -> Self {
        self.snapshot.corpses.push(Corpse {
            unit_id,
            position: Position::new(unit_id as i32 * 3, 10),
            category,
        });
        self
    }

    pub fn with_corpse_at(mut self, unit_id: u32, category: MonsterCategory, x: i32, y: i32) -> Self {
        self.snapshot.corpses.push(Corpse {
            unit_id,
            position: Position::new(x, y),
            category,
        });
        self
    }

    pub fn with_ground_item(self, name: &str, x: i32) -> Self {
        self.with_item(name, LocationKind::Ground, x, ItemQuality::Normal)
    }

    pub fn with_inventory_item(self, name: &str, x: i32) -> Self {
        self.with_item(name, LocationKind::Inventory, x, ItemQuality::Normal)
    }

    pub fn with_stash_item(self, name: &str, x: i32) -> Self {
        self.with_item(name, LocationKind::Stash, x, ItemQuality::Normal)
    }

    pub fn with_item(mut self, name: &str, kind: LocationKind, x: i32, quality: ItemQuality) -> Self {
        self.snapshot.items.push(SnapshotItem {
            name: name.to_string(),
            quality,
            identified: true,
            location: ItemLocation { kind, page: 0 },
            position: Position::new(x, 0),
            ..SnapshotItem::default()
        });
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}
