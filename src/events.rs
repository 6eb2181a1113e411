//! Domain events produced by a progression pass.
//!
//! The engine never touches presentation concerns; it returns these events
//! and the caller (UI layer, notification scheduler, simulator report) maps
//! them to whatever it wants.

use crate::achievements::Rarity;
use crate::challenges::ChallengeKind;
use crate::player::PlayerRank;
use uuid::Uuid;

/// A single event produced while applying a metric sample.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// The player's level increased. Fired once per XP grant with the
    /// final level, even when several levels were gained at once.
    LevelUp { new_level: u32 },

    /// The player's rank tier changed.
    RankUp { new_rank: PlayerRank },

    /// An achievement crossed its requirement and unlocked.
    AchievementUnlocked {
        id: &'static str,
        title: &'static str,
        rarity: Rarity,
        xp_bonus: u32,
    },

    /// A daily quest reached its requirement.
    QuestCompleted {
        id: String,
        title: String,
        xp_reward: u32,
    },

    /// A streak milestone bonus was claimed for the first time.
    StreakMilestone {
        days: u32,
        bonus_xp: u32,
        title: String,
    },

    /// A personal challenge reached its target.
    ChallengeCompleted {
        id: Uuid,
        kind: ChallengeKind,
        target: u64,
    },

    /// A group challenge's team total reached the shared target.
    GroupChallengeCompleted { id: Uuid, name: String },

    /// A weekly tournament ended and the user's result was archived.
    TournamentFinished {
        rank: u32,
        steps: u64,
        reward_xp: u32,
        title: String,
    },

    /// A season pass reward level was crossed.
    SeasonRewardUnlocked {
        season_id: String,
        level: u32,
        title: String,
    },
}
