use crate::tables::StaticTables;

pub const MAX_LEVEL: u32 = 99;

/// Levels from here on use the fractional approximation instead of the table
pub const HIGH_LEVEL_THRESHOLD: u32 = 90;

/// Known total needed to leave level 92
const LEVEL_93_TOTAL_XP: u64 = 2_097_310_703;

/// Experience still needed to reach the next level; 0 at max level.
///
/// Below 90 this is exact against the level table. From 90 on a shrinking
/// fraction of the current total stands in for the remainder, apart from level
/// 92 whose breakpoint is known.
pub fn xp_to_next_level(tables: &StaticTables, current_xp: u64, level: u32) -> u64 {
    if level >= HIGH_LEVEL_THRESHOLD {
        return high_level_remainder(current_xp, level);
    }

    tables
        .total_xp_for_level(level + 1)
        .map(|next| next.saturating_sub(current_xp))
        .unwrap_or_default()
}

fn high_level_remainder(current_xp: u64, level: u32) -> u64 {
    let fraction = match level {
        90 => 0.05,
        91 => 0.04,
        92 => return LEVEL_93_TOTAL_XP.saturating_sub(current_xp),
        93 => 0.03,
        94 => 0.025,
        95 => 0.02,
        96 => 0.015,
        97 => 0.01,
        98 => 0.005,
        _ => return 0,
    };
    (current_xp as f64 * fraction) as u64
}
