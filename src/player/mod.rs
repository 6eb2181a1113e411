//! Player progression: XP, levels, rank tiers, streaks, daily awards.

pub mod logic;
pub mod types;

pub use logic::{level_for_xp, xp_for_level};
pub use types::{DailyAwards, PlayerProgress, PlayerRank, RankDef, RANK_TABLE};
