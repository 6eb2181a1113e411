//! Tournament state types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The id the local profile uses in the competitor list.
pub const USER_ID: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub steps: u64,
    #[serde(default)]
    pub rank: u32,
}

/// One week-long tournament. The window is `[start, start + 7 days)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub user_result: Option<TournamentResult>,
}

impl Tournament {
    pub fn user(&self) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.id == USER_ID)
    }

    /// Whether `date` falls inside the tournament window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date
    }
}

/// The user's archived outcome of a finished tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub rank: u32,
    pub steps: u64,
    pub reward_xp: u32,
    pub reward_title: String,
}

/// The persisted tournament collection: at most one running tournament
/// plus a capped archive, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentState {
    pub current: Option<Tournament>,
    pub past: Vec<Tournament>,
}
