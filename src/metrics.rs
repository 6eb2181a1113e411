//! Metric samples from the health collaborator and the per-day history.
//!
//! A [`MetricSnapshot`] carries day-cumulative totals, so applying the same
//! snapshot twice must not double anything. The history keeps one
//! [`DailyRecord`] per calendar day; lifetime accumulators advance by the
//! delta against what was already recorded for that day, and period sums
//! (tournament weeks, weekly challenges) are recomputed from the records
//! rather than maintained incrementally.

use crate::constants::{MAX_DAILY_CALORIES, MAX_DAILY_DISTANCE_M, MAX_DAILY_STEPS};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Day-cumulative totals pushed by the external health collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSnapshot {
    pub steps: u32,
    pub distance_m: f64,
    pub calories: f64,
    pub timestamp: DateTime<Utc>,
}

impl MetricSnapshot {
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// A rejected snapshot field. The rest of the sample is still applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("steps value {0} exceeds the daily ceiling of {MAX_DAILY_STEPS}")]
    Steps(u32),
    #[error("distance value {0}m is outside 0..={MAX_DAILY_DISTANCE_M}m")]
    Distance(f64),
    #[error("calorie value {0} is outside 0..={MAX_DAILY_CALORIES}")]
    Calories(f64),
}

/// Accepted totals for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub steps: u32,
    pub distance_m: f64,
    pub calories: f64,
}

impl DailyRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            distance_m: 0.0,
            calories: 0.0,
        }
    }
}

/// How much a newly accepted snapshot advanced today's totals.
///
/// Sensor resets can make a day-cumulative value shrink; deltas clamp at
/// zero so accumulators never move backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayDelta {
    pub steps: u32,
    pub distance_m: f64,
    pub calories: f64,
}

/// One record per calendar day, most recent last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricHistory {
    pub days: Vec<DailyRecord>,
}

impl MetricHistory {
    pub fn record_for(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.days.iter().find(|r| r.date == date)
    }

    pub fn today(&self, date: NaiveDate) -> DailyRecord {
        self.record_for(date)
            .copied()
            .unwrap_or_else(|| DailyRecord::empty(date))
    }

    /// Validates a snapshot against the sanity ceilings and folds it into
    /// the history. Out-of-range fields are rejected individually: the
    /// previously accepted value for that field is kept and an error is
    /// returned for the caller to log. Returns the resulting record for the
    /// day, the delta against what was recorded before, and the rejections.
    pub fn apply(&mut self, snapshot: &MetricSnapshot) -> (DailyRecord, DayDelta, Vec<MetricError>) {
        let date = snapshot.day();
        let prev = self.today(date);
        let mut errors = Vec::new();

        let steps = if snapshot.steps > MAX_DAILY_STEPS {
            errors.push(MetricError::Steps(snapshot.steps));
            prev.steps
        } else {
            snapshot.steps
        };

        let distance_m = if !snapshot.distance_m.is_finite()
            || snapshot.distance_m < 0.0
            || snapshot.distance_m > MAX_DAILY_DISTANCE_M
        {
            errors.push(MetricError::Distance(snapshot.distance_m));
            prev.distance_m
        } else {
            snapshot.distance_m
        };

        let calories = if !snapshot.calories.is_finite()
            || snapshot.calories < 0.0
            || snapshot.calories > MAX_DAILY_CALORIES
        {
            errors.push(MetricError::Calories(snapshot.calories));
            prev.calories
        } else {
            snapshot.calories
        };

        let record = DailyRecord {
            date,
            steps,
            distance_m,
            calories,
        };

        let delta = DayDelta {
            steps: record.steps.saturating_sub(prev.steps),
            distance_m: (record.distance_m - prev.distance_m).max(0.0),
            calories: (record.calories - prev.calories).max(0.0),
        };

        match self.days.iter_mut().find(|r| r.date == date) {
            Some(existing) => *existing = record,
            None => {
                self.days.push(record);
                self.days.sort_by_key(|r| r.date);
            }
        }

        (record, delta, errors)
    }

    /// Total steps over `[from, to]`, both inclusive. Recomputed from the
    /// records every time so period totals never drift.
    pub fn steps_between(&self, from: NaiveDate, to: NaiveDate) -> u64 {
        self.days
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .map(|r| r.steps as u64)
            .sum()
    }

    /// Total distance in meters over `[from, to]`, both inclusive.
    pub fn distance_between(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        self.days
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .map(|r| r.distance_m)
            .sum()
    }
}
