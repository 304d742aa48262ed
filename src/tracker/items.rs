use chrono::{DateTime, TimeDelta, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::filter::ConsumableFilter;
use crate::snapshot::{ItemQuality, Snapshot, SnapshotItem};
use crate::store::{ItemRecord, ProfileData};
use crate::tables::StaticTables;

pub const DEFAULT_PICKUP_WINDOW: Duration = Duration::from_secs(10);

/// Display names of items that recently left the ground
///
/// Presence is tracked by name only, so two identically named drops leaving
/// the ground leave a single entry behind.
#[derive(Debug, Clone, Default)]
pub struct GroundWindow {
    departed: HashMap<String, DateTime<Utc>>,
}

impl GroundWindow {
    pub fn record(&mut self, name: String, now: DateTime<Utc>) {
        self.departed.insert(name, now);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.departed.contains_key(name)
    }

    /// Removes the entry, returning whether it was present
    pub fn take(&mut self, name: &str) -> bool {
        self.departed.remove(name).is_some()
    }

    /// Drops entries older than the grace period and returns how many went
    pub fn purge_expired(&mut self, now: DateTime<Utc>, grace: TimeDelta) -> usize {
        let before = self.departed.len();
        self.departed.retain(|_, left_at| now - *left_at <= grace);
        before - self.departed.len()
    }

    pub fn len(&self) -> usize {
        self.departed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departed.is_empty()
    }
}

/// Item sets from the previous processed snapshot
#[derive(Debug, Clone, Default)]
pub struct ItemBaseline {
    inventory: BTreeMap<String, SnapshotItem>,
    ground: BTreeMap<String, SnapshotItem>,
    initialized: bool,
}

impl ItemBaseline {
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickupOutcome {
    Logged { index: usize, record: ItemRecord },
    Filtered { name: String },
}

/// Detects legitimate ground-to-inventory pickups between snapshots
pub struct ItemTracker {
    tables: Arc<StaticTables>,
    filter: ConsumableFilter,
    pickup_window: TimeDelta,
}

impl ItemTracker {
    pub fn new(tables: Arc<StaticTables>, filter: ConsumableFilter, pickup_window: Duration) -> Self {
        Self {
            tables,
            filter,
            pickup_window: TimeDelta::from_std(pickup_window).unwrap_or(TimeDelta::seconds(10)),
        }
    }

    pub fn process(
        &self,
        baseline: &mut ItemBaseline,
        window: &mut GroundWindow,
        profile: &mut ProfileData,
        run_index: u32,
        snapshot: &Snapshot,
        now: DateTime<Utc>,
    ) -> Vec<PickupOutcome> {
        let ground: BTreeMap<String, SnapshotItem> = snapshot
            .ground_items()
            .map(|item| (item.key(), item.clone()))
            .collect();
        let inventory: BTreeMap<String, SnapshotItem> = snapshot
            .carried_items()
            .map(|item| (item.key(), item.clone()))
            .collect();

        if !baseline.initialized {
            debug!(
                ground = ground.len(),
                inventory = inventory.len(),
                "Item tracker baseline recorded"
            );
            baseline.ground = ground;
            baseline.inventory = inventory;
            baseline.initialized = true;
            return Vec::new();
        }

        for (key, item) in &baseline.ground {
            if !ground.contains_key(key) {
                window.record(self.tables.display_name(&item.name), now);
            }
        }
        let expired = window.purge_expired(now, self.pickup_window);
        if expired > 0 {
            debug!(expired, "Expired ground departures");
        }

        let mut outcomes = Vec::new();
        for (key, item) in &inventory {
            if baseline.inventory.contains_key(key) {
                continue;
            }

            let name = self.tables.display_name(&item.name);
            if window.take(&name) {
                outcomes.push(self.accept(item, name, profile, run_index, now));
            } else {
                debug!(item = %name, "Inventory item did not come from the ground");
            }
        }

        baseline.ground = ground;
        baseline.inventory = inventory;
        outcomes
    }

    fn accept(
        &self,
        item: &SnapshotItem,
        name: String,
        profile: &mut ProfileData,
        run_index: u32,
        now: DateTime<Utc>,
    ) -> PickupOutcome {
        if profile.filters_enabled && self.filter.is_filtered(&name) {
            debug!(item = %name, "Pickup filtered out");
            return PickupOutcome::Filtered { name };
        }

        let record = ItemRecord {
            name: name.clone(),
            original_name: name,
            quality: item.quality.to_string(),
            run_index,
            time: now,
            affixes: self.affix_summary(item),
            is_ethereal: item.ethereal,
            is_identified: item.identified,
            item_level: item.level_req,
        };

        profile.items.push(record.clone());
        let index = profile.items.len() - 1;
        info!(
            item = %record.name,
            quality = %record.quality,
            run_index,
            index,
            "Item picked up"
        );

        PickupOutcome::Logged { index, record }
    }

    /// Short description of what makes the item notable
    pub fn affix_summary(&self, item: &SnapshotItem) -> String {
        let mut parts = Vec::new();

        match item.quality {
            ItemQuality::Magic | ItemQuality::Rare => {
                if !item.identified_name.is_empty() && item.identified_name != item.name {
                    return item.identified_name.clone();
                }
            }
            ItemQuality::Set if item.is_named && !item.identified_name.is_empty() => {
                parts.push(format!("Set: {}", item.identified_name));
            }
            ItemQuality::Unique if item.is_named && !item.identified_name.is_empty() => {
                parts.push(format!("Unique: {}", item.identified_name));
            }
            _ => {}
        }

        if item.ethereal {
            parts.push("Ethereal".to_string());
        }

        if item.has_sockets && !item.sockets.is_empty() {
            let socketed: Vec<String> = item
                .sockets
                .iter()
                .map(|s| self.tables.display_name(&s.name))
                .collect();
            parts.push(format!(
                "{} Sockets ({})",
                item.sockets.len(),
                socketed.join(", ")
            ));
        }

        if item.is_runeword {
            parts.push(format!("Runeword: {}", item.runeword_name));
        }

        if item.level_req > 30 {
            parts.push(format!("Req Level {}", item.level_req));
        }

        parts.join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ItemLocation, LocationKind, Position};

    fn item(name: &str, kind: LocationKind, x: i32) -> SnapshotItem {
        SnapshotItem {
            name: name.to_string(),
            quality: ItemQuality::Normal,
            location: ItemLocation { kind, page: 0 },
            position: Position::new(x, 0),
            ..SnapshotItem::default()
        }
    }

    fn frame(items: Vec<SnapshotItem>) -> Snapshot {
        Snapshot {
            in_game: true,
            area: 1,
            items,
            ..Snapshot::default()
        }
    }

    fn tracker() -> ItemTracker {
        ItemTracker::new(
            Arc::new(StaticTables::default()),
            ConsumableFilter::new(),
            DEFAULT_PICKUP_WINDOW,
        )
    }

    struct Harness {
        tracker: ItemTracker,
        baseline: ItemBaseline,
        window: GroundWindow,
        profile: ProfileData,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                tracker: tracker(),
                baseline: ItemBaseline::default(),
                window: GroundWindow::default(),
                profile: ProfileData::default(),
            }
        }

        fn step(&mut self, snapshot: &Snapshot, now: DateTime<Utc>) -> Vec<PickupOutcome> {
            self.tracker.process(
                &mut self.baseline,
                &mut self.window,
                &mut self.profile,
                1,
                snapshot,
                now,
            )
        }
    }

    #[test]
    fn first_snapshot_only_records_baseline() {
        let mut harness = Harness::new();
        let now = Utc::now();

        let outcomes = harness.step(&frame(vec![item("ShortBow", LocationKind::Inventory, 0)]), now);

        assert!(outcomes.is_empty());
        assert!(harness.baseline.is_initialized());
        assert!(harness.profile.items.is_empty());
    }

    #[test]
    fn ground_to_inventory_is_logged() {
        let mut harness = Harness::new();
        let now = Utc::now();

        harness.step(&frame(vec![item("ShortBow", LocationKind::Ground, 7)]), now);
        harness.step(&frame(vec![]), now + TimeDelta::milliseconds(200));
        let outcomes = harness.step(
            &frame(vec![item("ShortBow", LocationKind::Inventory, 0)]),
            now + TimeDelta::milliseconds(400),
        );

        assert_eq!(outcomes.len(), 1);
        assert!(matches!(&outcomes[0], PickupOutcome::Logged { index: 0, record } if record.name == "Short Bow"));
        assert_eq!(harness.profile.items[0].quality, "Normal");
        assert!(harness.window.is_empty());
    }

    #[test]
    fn pickup_in_same_tick_as_departure_is_logged() {
        let mut harness = Harness::new();
        let now = Utc::now();

        harness.step(&frame(vec![item("Shako", LocationKind::Ground, 7)]), now);
        let outcomes = harness.step(
            &frame(vec![item("Shako", LocationKind::Inventory, 0)]),
            now + TimeDelta::milliseconds(200),
        );

        assert_eq!(outcomes.len(), 1);
    }

    #[test]
    fn stash_transfer_is_not_a_pickup() {
        let mut harness = Harness::new();
        let now = Utc::now();

        harness.step(&frame(vec![]), now);
        let outcomes = harness.step(
            &frame(vec![item("ShortBow", LocationKind::Inventory, 0)]),
            now + TimeDelta::milliseconds(200),
        );

        assert!(outcomes.is_empty());
        assert!(harness.profile.items.is_empty());
    }

    #[test]
    fn departure_older_than_window_does_not_validate() {
        let mut harness = Harness::new();
        let now = Utc::now();

        harness.step(&frame(vec![item("ShortBow", LocationKind::Ground, 7)]), now);
        harness.step(&frame(vec![]), now + TimeDelta::seconds(1));
        let outcomes = harness.step(
            &frame(vec![item("ShortBow", LocationKind::Inventory, 0)]),
            now + TimeDelta::seconds(12),
        );

        assert!(outcomes.is_empty());
        assert!(harness.window.is_empty());
    }

    #[test]
    fn filtered_pickups_are_not_logged() {
        let mut harness = Harness::new();
        let now = Utc::now();

        harness.step(&frame(vec![item("Gold", LocationKind::Ground, 1)]), now);
        let outcomes = harness.step(
            &frame(vec![item("Gold", LocationKind::Inventory, 0)]),
            now + TimeDelta::milliseconds(200),
        );

        assert_eq!(
            outcomes,
            vec![PickupOutcome::Filtered {
                name: "Gold".to_string()
            }]
        );
        assert!(harness.profile.items.is_empty());
    }

    #[test]
    fn disabled_filter_logs_consumables() {
        let mut harness = Harness::new();
        harness.profile.filters_enabled = false;
        let now = Utc::now();

        harness.step(&frame(vec![item("Gold", LocationKind::Ground, 1)]), now);
        harness.step(
            &frame(vec![item("Gold", LocationKind::Inventory, 0)]),
            now + TimeDelta::milliseconds(200),
        );

        assert_eq!(harness.profile.items.len(), 1);
    }

    #[test]
    fn same_named_drops_share_one_window_entry() {
        let mut harness = Harness::new();
        let now = Utc::now();

        harness.step(
            &frame(vec![
                item("Ring", LocationKind::Ground, 1),
                item("Ring", LocationKind::Ground, 2),
            ]),
            now,
        );
        let outcomes = harness.step(
            &frame(vec![item("Ring", LocationKind::Inventory, 0)]),
            now + TimeDelta::milliseconds(200),
        );

        assert_eq!(outcomes.len(), 1);
        assert!(harness.window.is_empty());
    }

    #[test]
    fn summarizes_affixes() {
        let tracker = tracker();
        let unique = SnapshotItem {
            name: "Shako".to_string(),
            quality: ItemQuality::Unique,
            is_named: true,
            identified_name: "Harlequin Crest".to_string(),
            ethereal: true,
            has_sockets: true,
            sockets: vec![item("Ber", LocationKind::Inventory, 0)],
            level_req: 62,
            ..SnapshotItem::default()
        };

        assert_eq!(
            tracker.affix_summary(&unique),
            "Unique: Harlequin Crest • Ethereal • 1 Sockets (Ber) • Req Level 62"
        );

        let magic = SnapshotItem {
            name: "GrandCharm".to_string(),
            quality: ItemQuality::Magic,
            identified_name: "Lion Branded Grand Charm of Vita".to_string(),
            ethereal: true,
            ..SnapshotItem::default()
        };
        assert_eq!(tracker.affix_summary(&magic), "Lion Branded Grand Charm of Vita");

        let runeword = SnapshotItem {
            name: "Flail".to_string(),
            is_runeword: true,
            runeword_name: "Heart of the Oak".to_string(),
            level_req: 20,
            ..SnapshotItem::default()
        };
        assert_eq!(tracker.affix_summary(&runeword), "Runeword: Heart of the Oak");
    }

    #[test]
    fn purge_keeps_entries_inside_grace() {
        let mut window = GroundWindow::default();
        let now = Utc::now();
        window.record("Old".to_string(), now - TimeDelta::seconds(11));
        window.record("Fresh".to_string(), now - TimeDelta::seconds(3));

        assert_eq!(window.purge_expired(now, TimeDelta::seconds(10)), 1);
        assert!(window.contains("Fresh"));
        assert!(!window.contains("Old"));
    }
}
