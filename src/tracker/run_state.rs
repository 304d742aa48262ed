use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::RunRegistries;
use crate::store::TrackerState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    #[default]
    InMenu,
    InRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunTransition {
    Started {
        run_index: u32,
    },
    Completed {
        run_index: u32,
        duration_ms: u64,
        xp_gained: u64,
    },
}

/// Advances the run state machine on one snapshot's `in_game` flag.
///
/// Entering a game rebuilds every per-run registry; leaving one records the
/// run's duration and XP and moves the run index forward.
pub fn observe_run_state(
    state: &mut TrackerState,
    in_game: bool,
    now: DateTime<Utc>,
) -> Option<RunTransition> {
    match (state.session.phase, in_game) {
        (RunPhase::InMenu, true) => Some(start_run(state, now)),
        (RunPhase::InRun, false) => complete_run(state, now),
        _ => None,
    }
}

fn start_run(state: &mut TrackerState, now: DateTime<Utc>) -> RunTransition {
    let session = &mut state.session;
    session.phase = RunPhase::InRun;
    session.run_started_at = Some(now);
    session.registries = RunRegistries::default();

    let xp = &mut state.profile.xp_tracking;
    xp.xp_this_run = 0;
    xp.run_start_xp = xp.current_xp;

    info!(run_index = session.run_index, "Run started");
    RunTransition::Started {
        run_index: session.run_index,
    }
}

fn complete_run(state: &mut TrackerState, now: DateTime<Utc>) -> Option<RunTransition> {
    state.session.phase = RunPhase::InMenu;
    let started = state.session.run_started_at.take()?;

    let duration_ms = u64::try_from((now - started).num_milliseconds()).unwrap_or_default();
    let xp_gained = state.profile.xp_tracking.xp_this_run;
    let run_index = state.session.run_index;

    state.profile.run_times.push(duration_ms);
    if xp_gained > 0 {
        state.profile.record_run_xp(xp_gained);
    }
    state.session.run_index += 1;

    info!(run_index, duration_ms, xp_gained, "Run completed");
    Some(RunTransition::Completed {
        run_index,
        duration_ms,
        xp_gained,
    })
}
