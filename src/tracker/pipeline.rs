use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::filter::ConsumableFilter;
use super::items::{ItemTracker, PickupOutcome, DEFAULT_PICKUP_WINDOW};
use super::kills::count_new_kills;
use super::run_state::{observe_run_state, RunTransition};
use crate::event::TrackerEvent;
use crate::experience::{ExperienceEstimator, ExperienceEstimatorBuilder, RunsEstimator};
use crate::snapshot::Snapshot;
use crate::store::{TrackerState, TrackerStore};
use crate::tables::StaticTables;

/// Feeds snapshots through run state, kill diff, item diff and XP in that order
pub struct Tracker {
    store: Arc<TrackerStore>,
    items: ItemTracker,
    experience: ExperienceEstimator,
}

impl Tracker {
    pub fn builder(store: Arc<TrackerStore>, tables: Arc<StaticTables>) -> TrackerBuilder {
        TrackerBuilder::new(store, tables)
    }

    pub fn store(&self) -> &Arc<TrackerStore> {
        &self.store
    }

    /// Applies one snapshot under a single exclusive store lock.
    ///
    /// Item and XP processing is skipped while the player is not in a world
    /// (area 0). Completed runs and logged pickups are saved in the background.
    pub async fn process_snapshot(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> Vec<TrackerEvent> {
        let mut events = Vec::new();
        let mut persist = false;

        {
            let mut guard = self.store.write().await;
            let state: &mut TrackerState = &mut guard;

            if let Some(transition) = observe_run_state(state, snapshot.in_game, now) {
                events.push(match transition {
                    RunTransition::Started { run_index } => TrackerEvent::RunStarted {
                        run_index,
                        started_at: now,
                    },
                    RunTransition::Completed {
                        run_index,
                        duration_ms,
                        xp_gained,
                    } => {
                        persist = true;
                        TrackerEvent::RunCompleted {
                            run_index,
                            duration_ms,
                            xp_gained,
                        }
                    }
                });
            }

            let fresh = count_new_kills(
                &mut state.session.registries.corpses,
                &mut state.profile,
                &snapshot.corpses,
            );
            let counted_before = state.profile.total_kills - fresh.len() as u64;
            for (n, corpse) in fresh.into_iter().enumerate() {
                events.push(TrackerEvent::MonsterKilled {
                    unit_id: corpse.unit_id,
                    category: corpse.category,
                    total_kills: counted_before + n as u64 + 1,
                });
            }

            if snapshot.in_world() {
                state.session.character.area = snapshot.area;
                state.session.character.level = snapshot.player.level;
                state.session.character.class_id = Some(snapshot.player.class_id);

                let run_index = state.session.run_index;
                let registries = &mut state.session.registries;
                let outcomes = self.items.process(
                    &mut registries.baseline,
                    &mut registries.ground_window,
                    &mut state.profile,
                    run_index,
                    snapshot,
                    now,
                );
                for outcome in outcomes {
                    events.push(match outcome {
                        PickupOutcome::Logged { index, record } => {
                            persist = true;
                            TrackerEvent::ItemPickedUp {
                                index,
                                name: record.name,
                                quality: record.quality,
                                run_index: record.run_index,
                            }
                        }
                        PickupOutcome::Filtered { name } => TrackerEvent::ItemFiltered { name },
                    });
                }

                if let Some(level_up) = self.experience.observe(state, &snapshot.player, now) {
                    events.push(TrackerEvent::LevelUp {
                        from: level_up.from,
                        to: level_up.to,
                    });
                }
            }
        }

        if persist {
            self.store.persist_in_background();
        }
        if !events.is_empty() {
            debug!(events = events.len(), "Snapshot processed");
        }
        events
    }
}

pub struct TrackerBuilder {
    store: Arc<TrackerStore>,
    tables: Arc<StaticTables>,
    filter: ConsumableFilter,
    pickup_window: Duration,
    experience: ExperienceEstimatorBuilder,
}

impl TrackerBuilder {
    fn new(store: Arc<TrackerStore>, tables: Arc<StaticTables>) -> Self {
        Self {
            experience: ExperienceEstimator::builder(Arc::clone(&tables)),
            store,
            tables,
            filter: ConsumableFilter::new(),
            pickup_window: DEFAULT_PICKUP_WINDOW,
        }
    }

    pub fn with_filter(mut self, filter: ConsumableFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_pickup_window(mut self, pickup_window: Duration) -> Self {
        self.pickup_window = pickup_window;
        self
    }

    pub fn with_estimator(mut self, estimator: Arc<dyn RunsEstimator>) -> Self {
        self.experience = self.experience.with_estimator(estimator);
        self
    }

    pub fn build(self) -> Tracker {
        Tracker {
            store: self.store,
            items: ItemTracker::new(self.tables, self.filter, self.pickup_window),
            experience: self.experience.build(),
        }
    }
}
