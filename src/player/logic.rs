//! XP curve, leveling, streak rules and daily step awards.
//!
//! Functions here are pure over [`PlayerProgress`]; XP amounts they return
//! are granted by the coordinator so every grant also feeds the season pass.

use crate::constants::{
    BONUS_XP_10K, BONUS_XP_15K, BONUS_XP_20K, DAILY_GOAL_BONUS_XP, STEPS_PER_XP, STREAK_MILESTONES,
    XP_CURVE_BASE, XP_CURVE_POWER,
};
use crate::events::ProgressEvent;
use crate::player::types::{DailyAwards, PlayerProgress, PlayerRank};
use chrono::NaiveDate;

/// Total XP required to hold `level`. Level 1 is free.
pub fn xp_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    (XP_CURVE_BASE * f64::from(level).powf(XP_CURVE_POWER)).floor() as u64
}

/// Largest level whose threshold the given XP total meets.
pub fn level_for_xp(total_xp: u64) -> u32 {
    let mut level = 1;
    while xp_for_level(level + 1) <= total_xp {
        level += 1;
    }
    level
}

/// Adds XP and recomputes level and rank. Emits at most one `LevelUp`
/// (carrying the final level) and one `RankUp` per call.
pub fn add_xp(player: &mut PlayerProgress, amount: u64, events: &mut Vec<ProgressEvent>) {
    if amount == 0 {
        return;
    }
    player.total_xp += amount;

    let new_level = level_for_xp(player.total_xp);
    if new_level > player.level {
        player.level = new_level;
        events.push(ProgressEvent::LevelUp { new_level });

        let new_rank = PlayerRank::for_level(new_level);
        if new_rank > player.rank {
            player.rank = new_rank;
            events.push(ProgressEvent::RankUp { new_rank });
        }
    }
}

/// Counts `today` toward `days_active` the first time it is seen.
pub fn record_activity(player: &mut PlayerProgress, today: NaiveDate) {
    if player.last_active_date != Some(today) {
        player.days_active += 1;
        player.last_active_date = Some(today);
    }
}

/// Advances the goal streak for `today`. Consecutive goal days extend the
/// streak, a gap restarts it at 1, and a repeat call for the same day is a
/// no-op. Returns whether the streak moved.
pub fn on_goal_reached(player: &mut PlayerProgress, today: NaiveDate) -> bool {
    match player.last_goal_date {
        Some(last) if last == today => return false,
        Some(last) => {
            let gap = (today - last).num_days();
            if gap == 1 {
                player.current_streak += 1;
            } else {
                player.current_streak = 1;
            }
        }
        None => player.current_streak = 1,
    }
    player.last_goal_date = Some(today);
    player.longest_streak = player.longest_streak.max(player.current_streak);
    true
}

/// Claims any streak milestones the current streak has reached and the
/// profile has never claimed. Returns `(days, bonus_xp)` per claim; the
/// claimed set is permanent, so a streak that resets and climbs back never
/// pays the same milestone twice.
pub fn claim_streak_milestones(player: &mut PlayerProgress) -> Vec<(u32, u32)> {
    let mut claimed = Vec::new();
    for (days, bonus) in STREAK_MILESTONES {
        if player.current_streak >= days && player.claimed_streak_milestones.insert(days) {
            claimed.push((days, bonus));
        }
    }
    claimed
}

/// XP newly owed for today's step count: the passive `steps / 100` reward
/// plus any threshold bonus crossed since the last update. Every award is
/// recorded in `awards`, so replaying the same snapshot owes nothing.
pub fn daily_step_xp(awards: &mut DailyAwards, steps: u32) -> u64 {
    let mut xp = 0u64;

    let owed = u64::from(steps / STEPS_PER_XP);
    if owed > awards.step_xp_granted {
        xp += owed - awards.step_xp_granted;
        awards.step_xp_granted = owed;
    }

    for (threshold, bonus) in [
        (10_000, BONUS_XP_10K),
        (15_000, BONUS_XP_15K),
        (20_000, BONUS_XP_20K),
    ] {
        if steps >= threshold && awards.thresholds_claimed.insert(threshold) {
            xp += u64::from(bonus);
        }
    }

    xp
}

/// Goal bonus XP, paid at most once per day.
pub fn daily_goal_bonus(awards: &mut DailyAwards, steps: u32, goal: u32) -> u64 {
    if steps >= goal && !awards.goal_bonus_claimed {
        awards.goal_bonus_claimed = true;
        u64::from(DAILY_GOAL_BONUS_XP)
    } else {
        0
    }
}
