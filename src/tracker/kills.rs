use std::collections::HashMap;
use tracing::debug;

use crate::snapshot::{Corpse, Position};
use crate::store::ProfileData;

/// Corpses already counted during the current run, keyed by unit id
///
/// A unit id seen again at a different position is a new spawn that reused
/// the id, so it is counted again.
#[derive(Debug, Clone, Default)]
pub struct CorpseRegistry {
    seen: HashMap<u32, Position>,
}

impl CorpseRegistry {
    /// Records the corpse and returns true when it has not been counted yet
    pub fn observe(&mut self, corpse: &Corpse) -> bool {
        match self.seen.insert(corpse.unit_id, corpse.position) {
            Some(previous) => previous != corpse.position,
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Counts every corpse in the snapshot that the registry has not seen yet
pub fn count_new_kills<'a>(
    registry: &mut CorpseRegistry,
    profile: &mut ProfileData,
    corpses: &'a [Corpse],
) -> Vec<&'a Corpse> {
    let mut fresh = Vec::new();

    for corpse in corpses {
        if registry.observe(corpse) {
            profile.record_kill(corpse.category);
            fresh.push(corpse);
        }
    }

    if !fresh.is_empty() {
        debug!(
            new_kills = fresh.len(),
            total_kills = profile.total_kills,
            "Counted new corpses"
        );
    }

    fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MonsterCategory;
    use strum::IntoEnumIterator;

    fn corpse(unit_id: u32, x: i32, category: MonsterCategory) -> Corpse {
        Corpse {
            unit_id,
            position: Position::new(x, 10),
            category,
        }
    }

    #[test]
    fn counts_each_corpse_once() {
        let mut registry = CorpseRegistry::default();
        let mut profile = ProfileData::default();
        let corpses = vec![
            corpse(1, 0, MonsterCategory::Normal),
            corpse(2, 5, MonsterCategory::Champion),
        ];

        assert_eq!(count_new_kills(&mut registry, &mut profile, &corpses).len(), 2);
        assert_eq!(count_new_kills(&mut registry, &mut profile, &corpses).len(), 0);

        assert_eq!(profile.total_kills, 2);
        assert_eq!(profile.kills(MonsterCategory::Normal), 1);
        assert_eq!(profile.kills(MonsterCategory::Champion), 1);
    }

    #[test]
    fn reused_unit_id_at_new_position_counts_again() {
        let mut registry = CorpseRegistry::default();
        let mut profile = ProfileData::default();

        count_new_kills(
            &mut registry,
            &mut profile,
            &[corpse(9, 0, MonsterCategory::Minion)],
        );
        let reused = [corpse(9, 40, MonsterCategory::Unique)];
        let fresh = count_new_kills(&mut registry, &mut profile, &reused);

        assert_eq!(fresh.len(), 1);
        assert_eq!(profile.total_kills, 2);
        assert_eq!(profile.kills(MonsterCategory::Unique), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn total_always_matches_category_sum() {
        let mut registry = CorpseRegistry::default();
        let mut profile = ProfileData::default();

        for (tick, category) in MonsterCategory::iter().cycle().take(23).enumerate() {
            let tick = tick as u32;
            let corpses = vec![
                corpse(tick, 0, category),
                corpse(tick / 2, tick as i32, category),
            ];
            count_new_kills(&mut registry, &mut profile, &corpses);

            let sum: u64 = MonsterCategory::iter().map(|c| profile.kills(c)).sum();
            assert_eq!(profile.total_kills, sum);
        }
    }
}
