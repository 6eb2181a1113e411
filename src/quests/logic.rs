//! Daily board generation, refresh and progress.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::constants::{DAILY_QUEST_COUNT, DAILY_STANDARD_QUESTS, QUEST_GENERATION_ATTEMPTS};
use crate::events::ProgressEvent;
use crate::metrics::DailyRecord;

use super::data::{PREMIUM_POOL, STANDARD_POOL};
use super::types::{Quest, QuestBoard, QuestKind};

/// Builds a fresh board for `date`: two distinct standard quests plus one
/// premium quest, backfilled with a third standard quest when every premium
/// id collides. Selection retries in a bounded loop; if the pools somehow
/// cannot yield three distinct ids the partial board is kept and a warning
/// is logged.
pub fn generate_board(date: NaiveDate, rng: &mut impl Rng) -> QuestBoard {
    for _ in 0..QUEST_GENERATION_ATTEMPTS {
        if let Some(quests) = try_generate(rng) {
            return QuestBoard {
                generated_on: Some(date),
                quests,
            };
        }
    }

    warn!(
        attempts = QUEST_GENERATION_ATTEMPTS,
        "could not assemble a full quest board, keeping a partial one"
    );
    let mut quests: Vec<Quest> = Vec::new();
    for def in STANDARD_POOL.iter().take(DAILY_QUEST_COUNT) {
        quests.push(Quest::from_def(def, false));
    }
    QuestBoard {
        generated_on: Some(date),
        quests,
    }
}

fn try_generate(rng: &mut impl Rng) -> Option<Vec<Quest>> {
    let mut standard: Vec<_> = STANDARD_POOL.iter().collect();
    standard.shuffle(rng);
    let mut premium: Vec<_> = PREMIUM_POOL.iter().collect();
    premium.shuffle(rng);

    let mut quests: Vec<Quest> = Vec::new();

    for &def in &standard {
        if quests.len() >= DAILY_STANDARD_QUESTS {
            break;
        }
        if !quests.iter().any(|q| q.id == def.id) {
            quests.push(Quest::from_def(def, false));
        }
    }
    if quests.len() < DAILY_STANDARD_QUESTS {
        return None;
    }

    if let Some(def) = premium
        .iter()
        .copied()
        .find(|def| !quests.iter().any(|q| q.id == def.id))
    {
        quests.push(Quest::from_def(def, true));
    } else if let Some(def) = standard
        .iter()
        .copied()
        .find(|def| !quests.iter().any(|q| q.id == def.id))
    {
        quests.push(Quest::from_def(def, false));
    }

    if quests.len() == DAILY_QUEST_COUNT {
        Some(quests)
    } else {
        None
    }
}

/// Regenerates the board when the stored generation date is not `today`.
/// Returns whether a new board was produced.
pub fn ensure_fresh(board: &mut QuestBoard, today: NaiveDate, rng: &mut impl Rng) -> bool {
    if board.generated_on == Some(today) {
        return false;
    }
    *board = generate_board(today, rng);
    true
}

/// Swaps one non-completed quest for a random same-tier quest whose id is
/// not already on the board. Returns `false` when the quest is unknown,
/// already completed, or no replacement candidate exists.
pub fn refresh_quest(board: &mut QuestBoard, quest_id: &str, rng: &mut impl Rng) -> bool {
    let Some(index) = board.quests.iter().position(|q| q.id == quest_id) else {
        return false;
    };
    if board.quests[index].completed {
        return false;
    }

    let premium = board.quests[index].premium;
    let pool = if premium { PREMIUM_POOL } else { STANDARD_POOL };
    let candidates: Vec<_> = pool.iter().filter(|def| !board.holds(def.id)).collect();

    match candidates.choose(rng) {
        Some(&def) => {
            board.quests[index] = Quest::from_def(def, premium);
            true
        }
        None => false,
    }
}

/// Applies today's totals to the board. Progress is the metric value
/// itself, not an increment, so replaying a snapshot is harmless. Premium
/// quests are ignored entirely without the entitlement. Completion pays
/// out exactly once.
pub fn update_progress(
    board: &mut QuestBoard,
    record: &DailyRecord,
    premium_entitled: bool,
) -> (u64, Vec<ProgressEvent>) {
    let mut xp = 0u64;
    let mut events = Vec::new();

    for quest in &mut board.quests {
        if quest.premium && !premium_entitled {
            continue;
        }

        let value = match quest.kind {
            QuestKind::Steps => record.steps,
            QuestKind::DistanceMeters => record.distance_m.max(0.0) as u32,
            QuestKind::Calories => record.calories.max(0.0) as u32,
        };
        quest.progress = value;

        if value >= quest.requirement && !quest.completed {
            quest.completed = true;
            xp += u64::from(quest.xp_reward);
            events.push(ProgressEvent::QuestCompleted {
                id: quest.id.clone(),
                title: quest.title.clone(),
                xp_reward: quest.xp_reward,
            });
        }
    }

    (xp, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn record(steps: u32, distance_m: f64, calories: f64) -> DailyRecord {
        DailyRecord {
            date: day(),
            steps,
            distance_m,
            calories,
        }
    }

    #[test]
    fn test_board_shape_across_seeds() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let board = generate_board(day(), &mut rng);

            assert_eq!(board.quests.len(), DAILY_QUEST_COUNT);
            for (i, a) in board.quests.iter().enumerate() {
                for b in &board.quests[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
            assert!(board.quests.iter().filter(|q| q.premium).count() <= 1);
            assert!(!board.quests[0].premium);
            assert!(!board.quests[1].premium);
        }
    }

    #[test]
    fn test_ensure_fresh_only_on_new_day() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut board = generate_board(day(), &mut rng);
        board.quests[0].progress = 999;

        assert!(!ensure_fresh(&mut board, day(), &mut rng));
        assert_eq!(board.quests[0].progress, 999);

        let tomorrow = day().succ_opt().unwrap();
        assert!(ensure_fresh(&mut board, tomorrow, &mut rng));
        assert_eq!(board.generated_on, Some(tomorrow));
        assert!(board.quests.iter().all(|q| q.progress == 0));
    }

    #[test]
    fn test_refresh_swaps_same_tier() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut board = generate_board(day(), &mut rng);
        let old_id = board.quests[0].id.clone();

        assert!(refresh_quest(&mut board, &old_id, &mut rng));
        assert!(!board.quests[0].premium);
        assert_ne!(board.quests[0].id, old_id);
        // Still three distinct ids.
        let mut ids: Vec<_> = board.quests.iter().map(|q| q.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DAILY_QUEST_COUNT);
    }

    #[test]
    fn test_refresh_rejects_completed_quest() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut board = generate_board(day(), &mut rng);
        let id = board.quests[1].id.clone();
        board.quests[1].completed = true;

        assert!(!refresh_quest(&mut board, &id, &mut rng));
        assert_eq!(board.quests[1].id, id);
    }

    #[test]
    fn test_progress_is_assignment_and_pays_once() {
        let mut board = QuestBoard {
            generated_on: Some(day()),
            quests: vec![Quest::from_def(&STANDARD_POOL[0], false)],
        };

        let (xp, events) = update_progress(&mut board, &record(6_000, 0.0, 0.0), false);
        assert_eq!(xp, 50);
        assert_eq!(events.len(), 1);
        // Progress is the raw metric value, even past the requirement.
        assert_eq!(board.quests[0].progress, 6_000);

        // Replaying the same totals pays nothing more.
        let (xp, events) = update_progress(&mut board, &record(6_000, 0.0, 0.0), false);
        assert_eq!(xp, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_premium_quest_ignored_without_entitlement() {
        let mut board = QuestBoard {
            generated_on: Some(day()),
            quests: vec![Quest::from_def(&PREMIUM_POOL[0], true)],
        };

        let (xp, events) = update_progress(&mut board, &record(16_000, 0.0, 0.0), false);
        assert_eq!(xp, 0);
        assert!(events.is_empty());
        assert_eq!(board.quests[0].progress, 0);

        let (xp, _) = update_progress(&mut board, &record(16_000, 0.0, 0.0), true);
        assert_eq!(xp, 200);
    }
}
