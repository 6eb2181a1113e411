//! Challenge kinds, instances and the active/archive split.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChallengeError {
    #[error("group challenges require the premium entitlement")]
    PremiumRequired,
    #[error("challenge target must be positive")]
    ZeroTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeKind {
    DailySteps,
    WeeklySteps,
    /// Measured in whole kilometers.
    WeeklyDistanceKm,
    StreakDays,
    DailyCalories,
}

impl ChallengeKind {
    /// Suggested targets shown when creating a challenge of this kind.
    pub fn preset_targets(&self) -> &'static [u64] {
        match self {
            ChallengeKind::DailySteps => &[5_000, 8_000, 10_000, 12_000, 15_000, 20_000],
            ChallengeKind::WeeklySteps => &[35_000, 50_000, 70_000, 100_000],
            ChallengeKind::WeeklyDistanceKm => &[10, 20, 30, 50, 100],
            ChallengeKind::StreakDays => &[3, 7, 14, 21, 30],
            ChallengeKind::DailyCalories => &[300, 500, 700, 1_000],
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ChallengeKind::DailySteps | ChallengeKind::WeeklySteps => "steps",
            ChallengeKind::WeeklyDistanceKm => "km",
            ChallengeKind::StreakDays => "days",
            ChallengeKind::DailyCalories => "kcal",
        }
    }
}

/// A personal challenge. Lives in the active list until it completes or
/// its deadline passes, then moves to the archive for good.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub kind: ChallengeKind,
    pub target: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub current_progress: u64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Challenge {
    pub fn new(
        kind: ChallengeKind,
        target: u64,
        duration_days: u32,
        today: NaiveDate,
    ) -> Result<Self, ChallengeError> {
        if target == 0 {
            return Err(ChallengeError::ZeroTarget);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            target,
            start_date: today,
            end_date: today + chrono::Duration::days(i64::from(duration_days)),
            current_progress: 0,
            completed: false,
            completed_at: None,
        })
    }

    pub fn expired(&self, today: NaiveDate) -> bool {
        !self.completed && today > self.end_date
    }
}

/// Persisted challenge collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChallengeList {
    pub active: Vec<Challenge>,
    pub archive: Vec<Challenge>,
}
