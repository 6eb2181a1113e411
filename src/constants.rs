//! Shared balance constants for the progression engine.
//!
//! All core balance numbers should be defined here.
//! Change once, test everywhere.

// =============================================================================
// DAILY GOAL
// =============================================================================

/// Default daily step goal.
pub const DEFAULT_DAILY_GOAL: u32 = 10_000;

/// Lowest configurable daily step goal.
pub const MIN_DAILY_GOAL: u32 = 1_000;

/// Highest configurable daily step goal.
pub const MAX_DAILY_GOAL: u32 = 50_000;

// =============================================================================
// XP RATES
// =============================================================================

/// Steps per 1 XP of passive walking reward.
pub const STEPS_PER_XP: u32 = 100;

/// One-time day bonus for crossing 10,000 steps.
pub const BONUS_XP_10K: u32 = 20;

/// One-time day bonus for crossing 15,000 steps.
pub const BONUS_XP_15K: u32 = 30;

/// One-time day bonus for crossing 20,000 steps.
pub const BONUS_XP_20K: u32 = 50;

/// One-time day bonus for reaching the configured daily goal.
pub const DAILY_GOAL_BONUS_XP: u32 = 50;

/// Base XP cost multiplier of the level curve: `50 * level^1.8`.
pub const XP_CURVE_BASE: f64 = 50.0;

/// Exponent of the level curve.
pub const XP_CURVE_POWER: f64 = 1.8;

// =============================================================================
// STREAK MILESTONES
// =============================================================================

/// Streak milestone bonuses as `(days, xp)` pairs, ascending.
/// Each is claimable at most once per profile lifetime.
pub const STREAK_MILESTONES: [(u32, u32); 3] = [(7, 1_000), (30, 5_000), (100, 20_000)];

// =============================================================================
// METRIC SANITY CEILINGS
// =============================================================================

/// Highest plausible step count for a single day.
pub const MAX_DAILY_STEPS: u32 = 1_000_000;

/// Highest plausible walking distance for a single day, in meters.
pub const MAX_DAILY_DISTANCE_M: f64 = 500_000.0;

/// Highest plausible calorie burn for a single day.
pub const MAX_DAILY_CALORIES: f64 = 10_000.0;

// =============================================================================
// QUESTS
// =============================================================================

/// Number of quests on the daily board.
pub const DAILY_QUEST_COUNT: usize = 3;

/// Standard-tier quests on a full board.
pub const DAILY_STANDARD_QUESTS: usize = 2;

/// Attempts at assembling a unique board before degrading to a partial one.
pub const QUEST_GENERATION_ATTEMPTS: u32 = 5;

// =============================================================================
// TOURNAMENTS
// =============================================================================

/// Days in a tournament window.
pub const TOURNAMENT_WINDOW_DAYS: u64 = 7;

/// Synthetic competitors seeded into each weekly tournament.
pub const TOURNAMENT_FIELD_SIZE: usize = 10;

/// Random weekly step range for synthetic competitors.
pub const TOURNAMENT_FIELD_STEPS_MIN: u64 = 5_000;
pub const TOURNAMENT_FIELD_STEPS_MAX: u64 = 25_000;

/// Finished tournaments kept in the archive.
pub const TOURNAMENT_HISTORY_CAP: usize = 10;

// =============================================================================
// SEASONS
// =============================================================================

/// Reward levels in a season pass.
pub const SEASON_REWARD_LEVELS: u32 = 10;

/// Season XP needed per reward level is `level * SEASON_XP_PER_LEVEL`,
/// summed cumulatively.
pub const SEASON_XP_PER_LEVEL: u64 = 1_000;
