//! Season pass types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonTheme {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonTheme {
    pub fn name(&self) -> &'static str {
        match self {
            SeasonTheme::Spring => "Spring",
            SeasonTheme::Summer => "Summer",
            SeasonTheme::Autumn => "Autumn",
            SeasonTheme::Winter => "Winter",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SeasonTheme::Spring => "spring",
            SeasonTheme::Summer => "summer",
            SeasonTheme::Autumn => "autumn",
            SeasonTheme::Winter => "winter",
        }
    }

    pub fn next(&self) -> SeasonTheme {
        match self {
            SeasonTheme::Spring => SeasonTheme::Summer,
            SeasonTheme::Summer => SeasonTheme::Autumn,
            SeasonTheme::Autumn => SeasonTheme::Winter,
            SeasonTheme::Winter => SeasonTheme::Spring,
        }
    }
}

/// What a season pass level grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RewardKind {
    Xp(u32),
    Theme,
    PremiumDays(u32),
    Achievement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonReward {
    pub level: u32,
    pub title: String,
    pub kind: RewardKind,
    #[serde(default)]
    pub unlocked: bool,
}

/// One quarterly season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub name: String,
    pub theme: SeasonTheme,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rewards: Vec<SeasonReward>,
}

impl Season {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date
    }
}

/// Persisted season collection plus the user's pass progress. Season XP
/// resets when a new season begins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonState {
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub current_id: Option<String>,
    #[serde(default)]
    pub season_xp: u64,
    #[serde(default)]
    pub season_level: u32,
}

impl SeasonState {
    pub fn current(&self) -> Option<&Season> {
        let id = self.current_id.as_deref()?;
        self.seasons.iter().find(|s| s.id == id)
    }

    pub fn current_mut(&mut self) -> Option<&mut Season> {
        let id = self.current_id.clone()?;
        self.seasons.iter_mut().find(|s| s.id == id)
    }
}
