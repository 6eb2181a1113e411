//! Season windows, the reward track and season XP.

use chrono::{Datelike, NaiveDate};

use crate::constants::{SEASON_REWARD_LEVELS, SEASON_XP_PER_LEVEL};
use crate::events::ProgressEvent;

use super::types::{RewardKind, Season, SeasonReward, SeasonState, SeasonTheme};

pub fn theme_for_month(month: u32) -> SeasonTheme {
    match month {
        3..=5 => SeasonTheme::Spring,
        6..=8 => SeasonTheme::Summer,
        9..=11 => SeasonTheme::Autumn,
        _ => SeasonTheme::Winter,
    }
}

/// First day of the quarter containing `date`.
pub fn quarter_start(date: NaiveDate) -> NaiveDate {
    let month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), month, 1)
        .unwrap_or(date)
}

/// First day of the following quarter.
pub fn quarter_end(date: NaiveDate) -> NaiveDate {
    let start = quarter_start(date);
    if start.month() == 10 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1).unwrap_or(start)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 3, 1).unwrap_or(start)
    }
}

fn reward_track(theme: SeasonTheme) -> Vec<SeasonReward> {
    (1..=SEASON_REWARD_LEVELS)
        .map(|level| {
            let (title, kind) = match level {
                1 => ("Season Start".to_string(), RewardKind::Xp(500)),
                3 => (format!("{} Theme", theme.name()), RewardKind::Theme),
                5 => ("Premium Bonus".to_string(), RewardKind::PremiumDays(7)),
                10 => ("Season Champion".to_string(), RewardKind::Achievement),
                n => (format!("Level {n}"), RewardKind::Xp(n * 100)),
            };
            SeasonReward {
                level,
                title,
                kind,
                unlocked: false,
            }
        })
        .collect()
}

fn new_season(today: NaiveDate) -> Season {
    let theme = theme_for_month(today.month());
    let start = quarter_start(today);
    Season {
        id: format!("season-{}-{}", today.year(), theme.slug()),
        name: format!("{} {}", theme.name(), today.year()),
        theme,
        start_date: start,
        end_date: quarter_end(today),
        rewards: reward_track(theme),
    }
}

/// Season pass level for an XP total: crossing the cumulative threshold of
/// reward level L (`1000 + 2000 + ... + L*1000`) puts the pass at `L + 1`,
/// capped at the track length.
pub fn season_level(season_xp: u64) -> u32 {
    let mut cumulative = 0;
    let mut level = 1;
    for reward_level in 1..=SEASON_REWARD_LEVELS {
        cumulative += u64::from(reward_level) * SEASON_XP_PER_LEVEL;
        if season_xp >= cumulative {
            level = reward_level + 1;
        } else {
            break;
        }
    }
    level.min(SEASON_REWARD_LEVELS)
}

/// Makes sure a season covering `today` exists and is current. Starting a
/// new season resets the pass XP and level.
pub fn ensure_current(state: &mut SeasonState, today: NaiveDate) {
    if state.current().map(|s| s.contains(today)).unwrap_or(false) {
        return;
    }

    let season = new_season(today);
    state.current_id = Some(season.id.clone());
    if !state.seasons.iter().any(|s| s.id == season.id) {
        state.seasons.push(season);
    }
    state.season_xp = 0;
    state.season_level = 1;
}

/// Adds season XP, recomputes the pass level and unlocks every reward
/// level the pass has reached. Unlocks are permanent within the season.
/// The pass starts at level 1, so the level-1 "Season Start" reward is a
/// welcome bonus paid on the first grant of each season.
pub fn add_season_xp(state: &mut SeasonState, amount: u64) -> Vec<ProgressEvent> {
    let mut events = Vec::new();
    if amount == 0 || state.current_id.is_none() {
        return events;
    }

    state.season_xp += amount;
    state.season_level = season_level(state.season_xp);

    let level = state.season_level;
    if let Some(season) = state.current_mut() {
        let season_id = season.id.clone();
        for reward in &mut season.rewards {
            if reward.level <= level && !reward.unlocked {
                reward.unlocked = true;
                events.push(ProgressEvent::SeasonRewardUnlocked {
                    season_id: season_id.clone(),
                    level: reward.level,
                    title: reward.title.clone(),
                });
            }
        }
    }

    events
}
