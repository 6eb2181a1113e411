//! Achievement definitions and persisted unlock state.
//!
//! Definitions are plain static data; all behavior lives in
//! [`logic`](super::logic). Persisted state references a definition by id so
//! catalog additions in later builds merge cleanly into old save files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::data::CATALOG;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Steps,
    Streak,
    Distance,
    Calories,
    Time,
    Special,
}

/// Rarity tier. Unlocking pays the tier's XP bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn xp_bonus(&self) -> u32 {
        match self {
            Rarity::Common => 50,
            Rarity::Rare => 150,
            Rarity::Epic => 500,
            Rarity::Legendary => 2_000,
        }
    }
}

/// What an achievement measures. Daily rules read today's record, total
/// rules read lifetime accumulators, time rules poll the clock of the
/// sample being applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    DailySteps(u32),
    TotalSteps(u64),
    StreakDays(u32),
    DailyCalories(u32),
    TotalDistanceM(u64),
    /// At least `steps` before `hour` o'clock.
    StepsBefore { hour: u32, steps: u32 },
    /// At least `steps` at or after `hour` o'clock.
    StepsAfter { hour: u32, steps: u32 },
    StepsOnMonday(u32),
    StepsOnWeekend(u32),
    /// Goal reached on a specific calendar day.
    CalendarDay { month: u32, day: u32 },
}

impl Rule {
    /// The target value shown as the progress denominator.
    pub fn requirement(&self) -> u64 {
        match *self {
            Rule::DailySteps(n) => u64::from(n),
            Rule::TotalSteps(n) => n,
            Rule::StreakDays(n) => u64::from(n),
            Rule::DailyCalories(n) => u64::from(n),
            Rule::TotalDistanceM(n) => n,
            Rule::StepsBefore { steps, .. } => u64::from(steps),
            Rule::StepsAfter { steps, .. } => u64::from(steps),
            Rule::StepsOnMonday(n) => u64::from(n),
            Rule::StepsOnWeekend(n) => u64::from(n),
            Rule::CalendarDay { .. } => 1,
        }
    }
}

/// One row of the static catalog.
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub rarity: Rarity,
    pub rule: Rule,
    /// Visible and unlockable only with the premium entitlement.
    pub premium: bool,
}

impl AchievementDef {
    pub fn by_id(id: &str) -> Option<&'static AchievementDef> {
        CATALOG.iter().find(|def| def.id == id)
    }
}

/// Persisted per-achievement state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementState {
    pub id: String,
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub progress: u64,
}

impl AchievementState {
    fn fresh(id: &str) -> Self {
        Self {
            id: id.to_string(),
            unlocked: false,
            unlocked_at: None,
            progress: 0,
        }
    }
}

/// The full persisted achievement collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementBook {
    pub entries: Vec<AchievementState>,
}

impl AchievementBook {
    /// A book with one fresh entry per catalog row.
    pub fn new() -> Self {
        Self {
            entries: CATALOG.iter().map(|d| AchievementState::fresh(d.id)).collect(),
        }
    }

    /// Appends fresh entries for catalog rows a loaded save predates, and
    /// drops entries whose definition no longer exists.
    pub fn sync_with_catalog(&mut self) {
        self.entries.retain(|e| AchievementDef::by_id(&e.id).is_some());
        for def in CATALOG {
            if !self.entries.iter().any(|e| e.id == def.id) {
                self.entries.push(AchievementState::fresh(def.id));
            }
        }
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.unlocked).count()
    }

    pub fn get(&self, id: &str) -> Option<&AchievementState> {
        self.entries.iter().find(|e| e.id == id)
    }
}
