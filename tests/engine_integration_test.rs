//! Integration tests: the full per-snapshot progression pass.
//!
//! Drives a real engine backed by a temporary store through multi-day
//! metric sequences and checks the cross-module effects: XP and leveling,
//! streaks, quest rotation, tournament rollover, and save round-trips.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stepquest::challenges::ChallengeKind;
use stepquest::{MetricSnapshot, ProgressEngine, ProgressEvent, ProgressStore};
use tempfile::TempDir;

fn engine_in(tmp: &TempDir) -> ProgressEngine {
    ProgressEngine::load(ProgressStore::with_dir(tmp.path())).expect("engine should load")
}

fn noon(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
}

fn snapshot(date: NaiveDate, steps: u32) -> MetricSnapshot {
    MetricSnapshot {
        steps,
        distance_m: f64::from(steps) * 0.7,
        calories: f64::from(steps) * 0.04,
        timestamp: noon(date),
    }
}

fn day(d: u32) -> NaiveDate {
    // June 2025: the 2nd is a Monday.
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

// =============================================================================
// XP, leveling and idempotency
// =============================================================================

#[test]
fn test_first_day_grants_step_xp_and_levels() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let events = engine.on_metrics(&snapshot(day(2), 12_000), &mut rng).unwrap();

    // 120 passive + 20 threshold + 50 goal, plus quest/achievement bonuses.
    assert!(engine.player().total_xp >= 190);
    assert!(events.iter().any(|e| matches!(e, ProgressEvent::LevelUp { .. })));
    assert_eq!(engine.player().lifetime_steps, 12_000);
}

#[test]
fn test_replaying_a_snapshot_changes_nothing() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    engine.on_metrics(&snapshot(day(2), 12_000), &mut rng).unwrap();
    let xp = engine.player().total_xp;
    let steps = engine.player().lifetime_steps;

    let events = engine.on_metrics(&snapshot(day(2), 12_000), &mut rng).unwrap();

    assert!(events.is_empty());
    assert_eq!(engine.player().total_xp, xp);
    assert_eq!(engine.player().lifetime_steps, steps);
}

#[test]
fn test_same_day_updates_accumulate_by_delta() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    engine.on_metrics(&snapshot(day(2), 4_000), &mut rng).unwrap();
    engine.on_metrics(&snapshot(day(2), 9_000), &mut rng).unwrap();

    assert_eq!(engine.player().lifetime_steps, 9_000);
    assert_eq!(engine.player().days_active, 1);
}

#[test]
fn test_rejected_field_keeps_prior_value() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    engine.on_metrics(&snapshot(day(2), 6_000), &mut rng).unwrap();
    let mut bad = snapshot(day(2), 6_500);
    bad.steps = 2_000_000;
    engine.on_metrics(&bad, &mut rng).unwrap();

    assert_eq!(engine.player().lifetime_steps, 6_000);
    assert_eq!(engine.history().today(day(2)).steps, 6_000);
}

#[test]
fn test_fully_rejected_sample_counts_no_activity() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let bad = MetricSnapshot {
        steps: 2_000_000,
        distance_m: -5.0,
        calories: 50_000.0,
        timestamp: noon(day(2)),
    };
    engine.on_metrics(&bad, &mut rng).unwrap();
    assert_eq!(engine.player().days_active, 0);

    engine.on_metrics(&snapshot(day(2), 3_000), &mut rng).unwrap();
    assert_eq!(engine.player().days_active, 1);
}

// =============================================================================
// Streaks
// =============================================================================

#[test]
fn test_streak_builds_resets_and_keeps_milestones_claimed() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // Seven consecutive goal days: streak milestone at 7 pays 1000 XP once.
    let mut milestone_events = 0;
    for d in 2..9 {
        let events = engine.on_metrics(&snapshot(day(d), 11_000), &mut rng).unwrap();
        milestone_events += events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::StreakMilestone { days: 7, .. }))
            .count();
    }
    assert_eq!(engine.player().current_streak, 7);
    assert_eq!(milestone_events, 1);

    // A lazy day breaks the streak; the next goal day restarts at 1.
    engine.on_metrics(&snapshot(day(9), 500), &mut rng).unwrap();
    engine.on_metrics(&snapshot(day(10), 11_000), &mut rng).unwrap();
    assert_eq!(engine.player().current_streak, 1);
    assert_eq!(engine.player().longest_streak, 7);

    // Climbing back to 7 does not pay the milestone again.
    let mut repeat_events = 0;
    for d in 11..17 {
        let events = engine.on_metrics(&snapshot(day(d), 11_000), &mut rng).unwrap();
        repeat_events += events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::StreakMilestone { .. }))
            .count();
    }
    assert_eq!(engine.player().current_streak, 7);
    assert_eq!(repeat_events, 0);
}

// =============================================================================
// Quests
// =============================================================================

#[test]
fn test_quest_board_regenerates_on_day_rollover() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    engine.on_metrics(&snapshot(day(2), 3_000), &mut rng).unwrap();
    assert_eq!(engine.quest_board().generated_on, Some(day(2)));
    assert_eq!(engine.quest_board().quests.len(), 3);

    engine.on_metrics(&snapshot(day(3), 3_000), &mut rng).unwrap();
    assert_eq!(engine.quest_board().generated_on, Some(day(3)));
    assert!(engine.quest_board().quests.iter().all(|q| !q.completed || q.progress > 0));
}

#[test]
fn test_quest_completion_grants_xp_once() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // 20k steps completes every standard step/distance quest on any board.
    let events = engine.on_metrics(&snapshot(day(2), 20_000), &mut rng).unwrap();
    let completed: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, ProgressEvent::QuestCompleted { .. }))
        .collect();
    assert!(!completed.is_empty());

    let events = engine.on_metrics(&snapshot(day(2), 20_000), &mut rng).unwrap();
    assert!(!events.iter().any(|e| matches!(e, ProgressEvent::QuestCompleted { .. })));
}

// =============================================================================
// Challenges
// =============================================================================

#[test]
fn test_personal_challenge_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    engine
        .create_challenge(ChallengeKind::WeeklySteps, 25_000, 7, day(2))
        .unwrap();
    assert_eq!(engine.challenges().active.len(), 1);

    engine.on_metrics(&snapshot(day(2), 9_000), &mut rng).unwrap();
    engine.on_metrics(&snapshot(day(3), 9_000), &mut rng).unwrap();
    let events = engine.on_metrics(&snapshot(day(4), 9_000), &mut rng).unwrap();

    assert!(events
        .iter()
        .any(|e| matches!(e, ProgressEvent::ChallengeCompleted { target: 25_000, .. })));
    assert!(engine.challenges().active.is_empty());
    assert_eq!(engine.challenges().archive.len(), 1);
}

#[test]
fn test_group_challenge_requires_premium() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);

    let result = engine.create_group_challenge(
        "Office Walk-off",
        ChallengeKind::WeeklySteps,
        50_000,
        7,
        day(2),
        vec![],
    );
    assert!(result.is_err());

    engine.set_premium(true);
    engine
        .create_group_challenge("Office Walk-off", ChallengeKind::WeeklySteps, 50_000, 7, day(2), vec![])
        .unwrap();
    assert_eq!(engine.group_challenges().active.len(), 1);
}

// =============================================================================
// Tournament
// =============================================================================

#[test]
fn test_tournament_rolls_over_and_pays_reward() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    // Walk hard all week: 50k a day guarantees rank 1 over a 25k-max field.
    for d in 2..9 {
        engine.on_metrics(&snapshot(day(d), 50_000), &mut rng).unwrap();
    }
    let xp_before = engine.player().total_xp;

    // Next Monday: the old tournament finishes and a new one starts.
    let events = engine.on_metrics(&snapshot(day(9), 3_000), &mut rng).unwrap();
    let finished = events
        .iter()
        .find(|e| matches!(e, ProgressEvent::TournamentFinished { .. }))
        .expect("tournament should finish on the next Monday");

    match finished {
        ProgressEvent::TournamentFinished { rank, reward_xp, .. } => {
            assert_eq!(*rank, 1);
            assert_eq!(*reward_xp, 5_000);
        }
        _ => unreachable!(),
    }
    assert!(engine.player().total_xp > xp_before + 5_000 - 1);
    assert_eq!(engine.tournament().past.len(), 1);
    let current = engine.tournament().current.as_ref().unwrap();
    assert_eq!(current.start_date, day(9));
}

// =============================================================================
// Persistence round-trip
// =============================================================================

#[test]
fn test_state_survives_reload() {
    let tmp = TempDir::new().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(10);

    {
        let mut engine = engine_in(&tmp);
        for d in 2..6 {
            engine.on_metrics(&snapshot(day(d), 11_000), &mut rng).unwrap();
        }
    }

    let engine = engine_in(&tmp);
    assert_eq!(engine.player().days_active, 4);
    assert_eq!(engine.player().current_streak, 4);
    assert!(engine.player().total_xp > 0);
    assert_eq!(engine.quest_board().generated_on, Some(day(5)));
    assert!(engine.tournament().current.is_some());
    assert!(engine.seasons().current().is_some());
    assert!(engine.achievements().unlocked_count() > 0);
}

#[test]
fn test_corrupt_save_starts_collection_fresh() {
    let tmp = TempDir::new().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    {
        let mut engine = engine_in(&tmp);
        engine.on_metrics(&snapshot(day(2), 11_000), &mut rng).unwrap();
    }
    std::fs::write(tmp.path().join("player.json"), "{broken").unwrap();

    let engine = engine_in(&tmp);
    // Player resets, the untouched collections still load.
    assert_eq!(engine.player().total_xp, 0);
    assert_eq!(engine.quest_board().generated_on, Some(day(2)));
}

// =============================================================================
// Seasons
// =============================================================================

#[test]
fn test_season_rolls_with_the_quarter() {
    let tmp = TempDir::new().unwrap();
    let mut engine = engine_in(&tmp);
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    engine.on_metrics(&snapshot(day(30), 11_000), &mut rng).unwrap();
    let summer = engine.seasons().current().unwrap().id.clone();
    assert!(engine.seasons().season_xp > 0);

    let october = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
    engine.on_metrics(&snapshot(october, 11_000), &mut rng).unwrap();

    let autumn = engine.seasons().current().unwrap();
    assert_ne!(autumn.id, summer);
    assert_eq!(autumn.start_date, october);
    assert_eq!(autumn.end_date, october + Duration::days(92));
}
