//! Property-style tests for quest board generation and refresh.
//!
//! Runs the generator across many seeds and checks the structural
//! invariants hold for every outcome: board size, id uniqueness, the
//! premium cap, and tier preservation on refresh.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stepquest::quests::logic::{ensure_fresh, generate_board, refresh_quest};
use stepquest::quests::{PREMIUM_POOL, STANDARD_POOL};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn premium_ids() -> Vec<&'static str> {
    PREMIUM_POOL.iter().map(|d| d.id).collect()
}

#[test]
fn test_every_seed_yields_three_unique_quests_with_premium_cap() {
    for seed in 0..500 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = generate_board(day(), &mut rng);

        assert_eq!(board.quests.len(), 3, "seed {seed}");

        let mut ids: Vec<_> = board.quests.iter().map(|q| q.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3, "duplicate ids with seed {seed}");

        let premium_count = board.quests.iter().filter(|q| q.premium).count();
        assert!(premium_count <= 1, "seed {seed}: {premium_count} premium quests");

        // The premium flag must agree with the pool the id came from.
        for quest in &board.quests {
            assert_eq!(
                quest.premium,
                premium_ids().contains(&quest.id.as_str()),
                "seed {seed}: flag mismatch for {}",
                quest.id
            );
        }
    }
}

#[test]
fn test_quest_ids_always_come_from_the_pools() {
    let known: Vec<_> = STANDARD_POOL
        .iter()
        .chain(PREMIUM_POOL.iter())
        .map(|d| d.id)
        .collect();

    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = generate_board(day(), &mut rng);
        for quest in &board.quests {
            assert!(known.contains(&quest.id.as_str()));
        }
    }
}

#[test]
fn test_refresh_preserves_tier_and_uniqueness_across_seeds() {
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = generate_board(day(), &mut rng);

        for slot in 0..3 {
            let old = board.quests[slot].clone();
            let swapped = refresh_quest(&mut board, &old.id, &mut rng);

            if swapped {
                let new = &board.quests[slot];
                assert_eq!(new.premium, old.premium, "seed {seed} slot {slot}");
                assert_ne!(new.id, old.id);
                assert_eq!(new.progress, 0);
            }

            let mut ids: Vec<_> = board.quests.iter().map(|q| q.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 3, "seed {seed} slot {slot}");
        }
    }
}

#[test]
fn test_same_day_never_regenerates() {
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = generate_board(day(), &mut rng);
        let ids: Vec<_> = board.quests.iter().map(|q| q.id.clone()).collect();

        for _ in 0..5 {
            assert!(!ensure_fresh(&mut board, day(), &mut rng));
        }
        let after: Vec<_> = board.quests.iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids, after);
    }
}
