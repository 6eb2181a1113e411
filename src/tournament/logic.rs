//! Tournament lifecycle: weekly windows, synthetic field, rewards.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

use crate::constants::{
    TOURNAMENT_FIELD_SIZE, TOURNAMENT_FIELD_STEPS_MAX, TOURNAMENT_FIELD_STEPS_MIN,
    TOURNAMENT_HISTORY_CAP, TOURNAMENT_WINDOW_DAYS,
};
use crate::events::ProgressEvent;
use crate::metrics::MetricHistory;

use super::types::{Competitor, Tournament, TournamentResult, TournamentState, USER_ID};

const FIELD_NAMES: [&str; 10] = [
    "Anna", "Mikhail", "Elena", "Dmitry", "Olga", "Alexey", "Maria", "Sergey", "Tatiana", "Igor",
];

/// The Monday starting the week that contains `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn reward_xp(rank: u32) -> u32 {
    match rank {
        1 => 5_000,
        2 => 3_000,
        3 => 2_000,
        4..=5 => 1_000,
        6..=10 => 500,
        _ => 100,
    }
}

fn reward_title(rank: u32) -> &'static str {
    match rank {
        1 => "Weekly Champion",
        2 => "Second Place",
        3 => "Third Place",
        4..=5 => "Top 5",
        6..=10 => "Top 10",
        _ => "Participant",
    }
}

fn rerank(competitors: &mut [Competitor]) {
    competitors.sort_by(|a, b| b.steps.cmp(&a.steps));
    for (index, competitor) in competitors.iter_mut().enumerate() {
        competitor.rank = index as u32 + 1;
    }
}

/// A fresh tournament for the week containing `today`, seeded with a
/// random synthetic field and the user at zero steps.
pub fn new_tournament(today: NaiveDate, rng: &mut impl Rng) -> Tournament {
    let start = week_start(today);
    let end = start + Duration::days(TOURNAMENT_WINDOW_DAYS as i64);

    let mut competitors = vec![Competitor {
        id: USER_ID.to_string(),
        name: "You".to_string(),
        steps: 0,
        rank: 0,
    }];
    for (index, name) in FIELD_NAMES.iter().take(TOURNAMENT_FIELD_SIZE).enumerate() {
        competitors.push(Competitor {
            id: format!("participant_{index}"),
            name: (*name).to_string(),
            steps: rng.gen_range(TOURNAMENT_FIELD_STEPS_MIN..=TOURNAMENT_FIELD_STEPS_MAX),
            rank: 0,
        });
    }
    rerank(&mut competitors);

    Tournament {
        id: format!("tournament_{start}"),
        start_date: start,
        end_date: end,
        competitors,
        user_result: None,
    }
}

/// Finishes an expired tournament (archiving the user's result and reward)
/// and starts a fresh one for the current week. After a dormant stretch
/// the replacement covers the week containing `today`; missed weeks are
/// not replayed. Creates the first tournament when none exists.
pub fn check_and_roll(
    state: &mut TournamentState,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<ProgressEvent> {
    let mut events = Vec::new();

    let expired = match &state.current {
        Some(t) => today >= t.end_date,
        None => false,
    };

    if expired {
        if let Some(mut finished) = state.current.take() {
            if let Some(user) = finished.user() {
                let result = TournamentResult {
                    rank: user.rank,
                    steps: user.steps,
                    reward_xp: reward_xp(user.rank),
                    reward_title: reward_title(user.rank).to_string(),
                };
                events.push(ProgressEvent::TournamentFinished {
                    rank: result.rank,
                    steps: result.steps,
                    reward_xp: result.reward_xp,
                    title: result.reward_title.clone(),
                });
                finished.user_result = Some(result);
            }
            state.past.insert(0, finished);
            state.past.truncate(TOURNAMENT_HISTORY_CAP);
        }
    }

    if state.current.is_none() {
        state.current = Some(new_tournament(today, rng));
    }

    events
}

/// Recomputes the user's weekly total from the metric history and reranks.
pub fn update_user_steps(state: &mut TournamentState, history: &MetricHistory, today: NaiveDate) {
    let Some(tournament) = state.current.as_mut() else {
        return;
    };
    let window_end = today.min(tournament.end_date - Duration::days(1));
    let total = history.steps_between(tournament.start_date, window_end);

    if let Some(user) = tournament.competitors.iter_mut().find(|c| c.id == USER_ID) {
        user.steps = total;
    }
    rerank(&mut tournament.competitors);
}
