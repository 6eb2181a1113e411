//! Player state types and the rank table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Rank tiers, unlocked by character level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerRank {
    Beginner,
    Walker,
    Hiker,
    Explorer,
    Adventurer,
    Athlete,
    Champion,
    Legend,
    Master,
    Grandmaster,
}

impl fmt::Display for PlayerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One row of the rank table.
pub struct RankDef {
    pub rank: PlayerRank,
    pub title: &'static str,
    pub min_level: u32,
}

/// Rank tiers in ascending level order.
pub const RANK_TABLE: &[RankDef] = &[
    RankDef { rank: PlayerRank::Beginner, title: "Beginner", min_level: 1 },
    RankDef { rank: PlayerRank::Walker, title: "Walker", min_level: 5 },
    RankDef { rank: PlayerRank::Hiker, title: "Hiker", min_level: 10 },
    RankDef { rank: PlayerRank::Explorer, title: "Explorer", min_level: 20 },
    RankDef { rank: PlayerRank::Adventurer, title: "Adventurer", min_level: 30 },
    RankDef { rank: PlayerRank::Athlete, title: "Athlete", min_level: 40 },
    RankDef { rank: PlayerRank::Champion, title: "Champion", min_level: 50 },
    RankDef { rank: PlayerRank::Legend, title: "Legend", min_level: 65 },
    RankDef { rank: PlayerRank::Master, title: "Master", min_level: 80 },
    RankDef { rank: PlayerRank::Grandmaster, title: "Grandmaster", min_level: 100 },
];

impl PlayerRank {
    /// Highest rank whose minimum level the given level meets.
    pub fn for_level(level: u32) -> PlayerRank {
        RANK_TABLE
            .iter()
            .rev()
            .find(|def| level >= def.min_level)
            .map(|def| def.rank)
            .unwrap_or(PlayerRank::Beginner)
    }

    pub fn title(&self) -> &'static str {
        RANK_TABLE
            .iter()
            .find(|def| def.rank == *self)
            .map(|def| def.title)
            .unwrap_or("Beginner")
    }
}

/// One-shot awards already claimed for a calendar day.
///
/// Every field resets when the date rolls over; the struct is persisted so
/// restarting mid-day cannot re-grant a bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAwards {
    pub date: NaiveDate,
    /// Passive step XP already granted today (`steps / 100` at last update).
    #[serde(default)]
    pub step_xp_granted: u64,
    /// Step thresholds (10k/15k/20k) whose bonus was already paid today.
    #[serde(default)]
    pub thresholds_claimed: BTreeSet<u32>,
    #[serde(default)]
    pub goal_bonus_claimed: bool,
}

impl DailyAwards {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            step_xp_granted: 0,
            thresholds_claimed: BTreeSet::new(),
            goal_bonus_claimed: false,
        }
    }
}

/// The persisted player profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub total_xp: u64,
    pub level: u32,
    pub rank: PlayerRank,

    // Lifetime accumulators, advanced by day deltas only.
    #[serde(default)]
    pub lifetime_steps: u64,
    #[serde(default)]
    pub lifetime_distance_m: f64,
    #[serde(default)]
    pub lifetime_calories: f64,
    #[serde(default)]
    pub days_active: u32,

    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub last_active_date: Option<NaiveDate>,
    /// Last day the configured goal was reached; guards the goal bonus.
    #[serde(default)]
    pub last_goal_date: Option<NaiveDate>,
    /// Streak milestones claimed over the profile lifetime. Never cleared,
    /// not even when the streak resets.
    #[serde(default)]
    pub claimed_streak_milestones: BTreeSet<u32>,

    #[serde(default)]
    pub daily_awards: Option<DailyAwards>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            rank: PlayerRank::Beginner,
            lifetime_steps: 0,
            lifetime_distance_m: 0.0,
            lifetime_calories: 0.0,
            days_active: 0,
            current_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            last_goal_date: None,
            claimed_streak_milestones: BTreeSet::new(),
            daily_awards: None,
        }
    }
}

impl PlayerProgress {
    /// The day's award record, rolled over to `date` if stale.
    pub fn awards_for(&mut self, date: NaiveDate) -> &mut DailyAwards {
        let stale = self
            .daily_awards
            .as_ref()
            .map(|a| a.date != date)
            .unwrap_or(true);
        if stale {
            self.daily_awards = Some(DailyAwards::new(date));
        }
        self.daily_awards.get_or_insert_with(|| DailyAwards::new(date))
    }
}
