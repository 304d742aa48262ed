use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::XpState;
use super::pagination::{paginate, ItemsPage};
use super::{StoreError, TrackerStore};
use crate::snapshot::MonsterCategory;
use crate::tables::StaticTables;

const NO_RUN: &str = "-";

/// Aggregate view served to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub normal: u64,
    pub champion: u64,
    pub unique: u64,
    pub super_unique: u64,
    pub minion: u64,
    pub total: u64,
    pub current_run: String,
    pub fastest_run: String,
    pub slowest_run: String,
    pub average_run: String,
    pub total_runs: usize,
    pub run_active: bool,
    pub total_items: usize,
    pub current_profile: String,
    pub profiles: Vec<String>,
    pub filters_enabled: bool,
    pub xp_tracking: XpState,
    pub player_level: u32,
    pub player_class: String,
    pub current_area: String,
    pub session_start_time: DateTime<Utc>,
    pub items_data: ItemsPage,
}

/// `HH:MM:SS`, hours are not wrapped at 24
pub fn format_duration_ms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

fn format_run(ms: Option<u64>) -> String {
    ms.map(format_duration_ms).unwrap_or_else(|| NO_RUN.to_string())
}

impl TrackerStore {
    pub async fn stats(&self, tables: &StaticTables, now: DateTime<Utc>) -> Result<GameStats, StoreError> {
        let profiles = self.list_profiles().await?;
        let state = self.state.read().await;
        let profile = &state.profile;
        let session = &state.session;

        let run_times = &profile.run_times;
        let average = (!run_times.is_empty())
            .then(|| run_times.iter().sum::<u64>() / run_times.len() as u64);
        let current = session.run_started_at.map(|started| {
            u64::try_from((now - started).num_milliseconds()).unwrap_or_default()
        });

        Ok(GameStats {
            normal: profile.kills(MonsterCategory::Normal),
            champion: profile.kills(MonsterCategory::Champion),
            unique: profile.kills(MonsterCategory::Unique),
            super_unique: profile.kills(MonsterCategory::SuperUnique),
            minion: profile.kills(MonsterCategory::Minion),
            total: profile.total_kills,
            current_run: format_run(current),
            fastest_run: format_run(run_times.iter().min().copied()),
            slowest_run: format_run(run_times.iter().max().copied()),
            average_run: format_run(average),
            total_runs: run_times.len(),
            run_active: session.run_active(),
            total_items: profile.items.len(),
            current_profile: state.profile_name.clone(),
            profiles,
            filters_enabled: profile.filters_enabled,
            xp_tracking: profile.xp_tracking.clone(),
            player_level: session.character.level,
            player_class: session
                .character
                .class_id
                .map(|id| tables.class_name(id))
                .unwrap_or_else(|| "Unknown".to_string()),
            current_area: tables.area_name(session.character.area),
            session_start_time: session.session_started_at,
            items_data: paginate(
                &profile.items,
                0,
                state.view.items_per_page,
                state.view.show_all,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryProfileRepository, ViewSettings};
    use chrono::TimeDelta;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[case(0, "00:00:00")]
    #[case(59_999, "00:00:59")]
    #[case(61_000, "00:01:01")]
    #[case(3_723_000, "01:02:03")]
    #[case(90_000_000, "25:00:00")]
    fn test_format_duration(#[case] ms: u64, #[case] expected: &str) {
        assert_eq!(format_duration_ms(ms), expected);
    }

    #[tokio::test]
    async fn test_stats_summarise_runs_and_kills() {
        let store = TrackerStore::new(
            Arc::new(InMemoryProfileRepository::new()),
            ViewSettings::default(),
        );
        let now = Utc::now();
        {
            let mut state = store.write().await;
            state.profile.record_kill(MonsterCategory::Normal);
            state.profile.record_kill(MonsterCategory::Normal);
            state.profile.record_kill(MonsterCategory::SuperUnique);
            state.profile.run_times = vec![60_000, 120_000, 90_000];
            state.session.run_started_at = Some(now - TimeDelta::seconds(5));
            state.session.character.class_id = Some(0);
            state.session.character.area = 108;
        }

        let stats = store.stats(&StaticTables::default(), now).await.unwrap();

        assert_eq!(stats.normal, 2);
        assert_eq!(stats.super_unique, 1);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.fastest_run, "00:01:00");
        assert_eq!(stats.slowest_run, "00:02:00");
        assert_eq!(stats.average_run, "00:01:30");
        assert_eq!(stats.current_run, "00:00:05");
        assert_eq!(stats.total_runs, 3);
        assert!(stats.run_active);
        assert_eq!(stats.player_class, "Amazon");
        assert_eq!(stats.current_area, "Chaos Sanctuary");
        assert_eq!(stats.profiles, vec!["default".to_string()]);
    }

    #[tokio::test]
    async fn test_stats_without_runs_use_placeholder() {
        let store = TrackerStore::new(
            Arc::new(InMemoryProfileRepository::new()),
            ViewSettings::default(),
        );

        let stats = store.stats(&StaticTables::default(), Utc::now()).await.unwrap();

        assert_eq!(stats.fastest_run, "-");
        assert_eq!(stats.average_run, "-");
        assert_eq!(stats.current_run, "-");
        assert!(!stats.run_active);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["superUnique"], 0);
        assert!(json["itemsData"]["items"].is_array());
    }
}
