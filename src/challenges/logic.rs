//! Personal challenge progress and lifecycle.

use chrono::{DateTime, NaiveDate, Utc};

use crate::events::ProgressEvent;
use crate::metrics::{DailyRecord, MetricHistory};

use super::types::{ChallengeKind, ChallengeList};

/// The current value of a challenge metric. Daily kinds read today's
/// record, weekly kinds are recomputed from the history over the challenge
/// window so a missed update can never lose progress.
pub(crate) fn metric_value(
    kind: ChallengeKind,
    record: &DailyRecord,
    streak: u32,
    history: &MetricHistory,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> u64 {
    match kind {
        ChallengeKind::DailySteps => u64::from(record.steps),
        ChallengeKind::WeeklySteps => history.steps_between(window_start, window_end),
        ChallengeKind::WeeklyDistanceKm => {
            (history.distance_between(window_start, window_end) / 1_000.0).max(0.0) as u64
        }
        ChallengeKind::StreakDays => u64::from(streak),
        ChallengeKind::DailyCalories => record.calories.max(0.0) as u64,
    }
}

/// Applies today's totals to every active challenge. A challenge that
/// reaches its target completes exactly once, emits an event, and moves to
/// the archive.
pub fn update_progress(
    list: &mut ChallengeList,
    record: &DailyRecord,
    streak: u32,
    history: &MetricHistory,
    now: DateTime<Utc>,
) -> Vec<ProgressEvent> {
    let mut events = Vec::new();
    let today = now.date_naive();

    for challenge in &mut list.active {
        let window_end = today.min(challenge.end_date);
        challenge.current_progress = metric_value(
            challenge.kind,
            record,
            streak,
            history,
            challenge.start_date,
            window_end,
        );

        if challenge.current_progress >= challenge.target && !challenge.completed {
            challenge.completed = true;
            challenge.completed_at = Some(now);
            events.push(ProgressEvent::ChallengeCompleted {
                id: challenge.id,
                kind: challenge.kind,
                target: challenge.target,
            });
        }
    }

    let completed: Vec<_> = list
        .active
        .iter()
        .filter(|c| c.completed)
        .cloned()
        .collect();
    list.archive.extend(completed);
    list.active.retain(|c| !c.completed);

    events
}

/// Moves past-deadline unfinished challenges to the archive. Irreversible.
pub fn archive_expired(list: &mut ChallengeList, today: NaiveDate) {
    let expired: Vec<_> = list
        .active
        .iter()
        .filter(|c| c.expired(today))
        .cloned()
        .collect();
    list.archive.extend(expired);
    list.active.retain(|c| !c.expired(today));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenges::types::Challenge;
    use chrono::TimeZone;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn at_noon(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
    }

    fn record(date: NaiveDate, steps: u32, calories: f64) -> DailyRecord {
        DailyRecord {
            date,
            steps,
            distance_m: 0.0,
            calories,
        }
    }

    #[test]
    fn test_daily_steps_completes_and_archives() {
        let mut list = ChallengeList::default();
        list.active
            .push(Challenge::new(ChallengeKind::DailySteps, 8_000, 7, day(1)).unwrap());
        let history = MetricHistory::default();

        let events = update_progress(
            &mut list,
            &record(day(1), 9_000, 0.0),
            0,
            &history,
            at_noon(day(1)),
        );

        assert_eq!(events.len(), 1);
        assert!(list.active.is_empty());
        assert_eq!(list.archive.len(), 1);
        assert!(list.archive[0].completed);
        assert!(list.archive[0].completed_at.is_some());
    }

    #[test]
    fn test_weekly_steps_recomputed_from_history() {
        let mut list = ChallengeList::default();
        list.active
            .push(Challenge::new(ChallengeKind::WeeklySteps, 20_000, 7, day(1)).unwrap());

        let mut history = MetricHistory::default();
        for (d, steps) in [(1, 8_000), (2, 7_000), (3, 6_000)] {
            history.days.push(record(day(d), steps, 0.0));
        }

        let events = update_progress(
            &mut list,
            &record(day(3), 6_000, 0.0),
            0,
            &history,
            at_noon(day(3)),
        );

        // 8k + 7k + 6k crosses 20k even though today alone does not.
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_expired_challenge_moves_to_archive() {
        let mut list = ChallengeList::default();
        list.active
            .push(Challenge::new(ChallengeKind::DailySteps, 50_000, 3, day(1)).unwrap());

        archive_expired(&mut list, day(4));
        assert_eq!(list.active.len(), 1);

        archive_expired(&mut list, day(5));
        assert!(list.active.is_empty());
        assert_eq!(list.archive.len(), 1);
        assert!(!list.archive[0].completed);
    }

    #[test]
    fn test_streak_challenge_reads_streak() {
        let mut list = ChallengeList::default();
        list.active
            .push(Challenge::new(ChallengeKind::StreakDays, 3, 30, day(1)).unwrap());
        let history = MetricHistory::default();

        let events = update_progress(&mut list, &record(day(1), 0, 0.0), 3, &history, at_noon(day(1)));
        assert_eq!(events.len(), 1);
    }
}
