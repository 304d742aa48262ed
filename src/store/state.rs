use chrono::{DateTime, Utc};

use super::models::{ProfileData, DEFAULT_PROFILE};
use crate::tracker::{RunPhase, RunRegistries};

pub const MIN_ITEMS_PER_PAGE: usize = 10;
pub const MAX_ITEMS_PER_PAGE: usize = 500;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 50;

/// Everything the polling pipeline and the query API share
#[derive(Debug, Clone)]
pub struct TrackerState {
    pub profile_name: String,
    pub profile: ProfileData,
    pub session: SessionState,
    pub view: ViewSettings,
}

impl TrackerState {
    pub fn new(view: ViewSettings, now: DateTime<Utc>) -> Self {
        Self {
            profile_name: DEFAULT_PROFILE.to_string(),
            profile: ProfileData::default(),
            session: SessionState::new(now),
            view,
        }
    }

    /// Makes `profile` the active one and starts a fresh session on top of it
    pub fn install_profile(&mut self, name: &str, mut profile: ProfileData, now: DateTime<Utc>) {
        profile.start_session();
        let completed = u32::try_from(profile.completed_runs()).unwrap_or(u32::MAX - 1);

        self.profile_name = name.to_string();
        self.profile = profile;
        self.session = SessionState::new(now);
        self.session.run_index = completed + 1;
    }
}

/// Live, non-persisted state of the current session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: RunPhase,
    /// Index the current (or next) run is logged under, starting at 1
    pub run_index: u32,
    /// Set while a run is being timed
    pub run_started_at: Option<DateTime<Utc>>,
    pub session_started_at: DateTime<Utc>,
    pub registries: RunRegistries,
    pub character: CharacterInfo,
}

impl SessionState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            phase: RunPhase::InMenu,
            run_index: 1,
            run_started_at: None,
            session_started_at: now,
            registries: RunRegistries::default(),
            character: CharacterInfo::default(),
        }
    }

    pub fn run_active(&self) -> bool {
        self.run_started_at.is_some()
    }

    /// Stops timing without recording a run; the next in-game tick opens a new one
    pub fn abandon_run(&mut self) {
        self.phase = RunPhase::InMenu;
        self.run_started_at = None;
        self.registries = RunRegistries::default();
    }
}

/// Last character details seen in a snapshot, cached for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterInfo {
    pub area: u32,
    pub level: u32,
    pub class_id: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub items_per_page: usize,
    pub show_all: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            show_all: false,
        }
    }
}

impl ViewSettings {
    pub fn clamp_page_size(items_per_page: usize) -> usize {
        items_per_page.clamp(MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(ViewSettings::clamp_page_size(0), MIN_ITEMS_PER_PAGE);
        assert_eq!(ViewSettings::clamp_page_size(75), 75);
        assert_eq!(ViewSettings::clamp_page_size(10_000), MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn installed_profile_continues_run_numbering() {
        let mut state = TrackerState::new(ViewSettings::default(), Utc::now());
        let mut profile = ProfileData::default();
        profile.run_times = vec![60_000, 75_000];
        profile.xp_tracking.session_xp_gained = 500;
        profile.xp_tracking.xp_per_hour = 1_200.0;

        state.install_profile("nightmare", profile, Utc::now());

        assert_eq!(state.profile_name, "nightmare");
        assert_eq!(state.session.run_index, 3);
        assert_eq!(state.profile.xp_tracking.session_xp_gained, 0);
        assert_eq!(state.profile.xp_tracking.xp_per_hour, 0.0);
        assert!(!state.session.run_active());
    }

    #[test]
    fn fresh_session_starts_in_menu_at_run_one() {
        let session = SessionState::new(Utc::now());
        assert_eq!(session.phase, RunPhase::InMenu);
        assert_eq!(session.run_index, 1);
        assert!(!session.run_active());
    }
}
