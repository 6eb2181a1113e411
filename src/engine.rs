//! The progression coordinator.
//!
//! [`ProgressEngine`] owns every persisted collection and applies metric
//! snapshots in a fixed order: validate, fold into history, step XP and
//! day bonuses, streak and milestones, achievements, quests, personal
//! challenges, group challenges, tournament, then persist. Every XP grant
//! also feeds the season pass. The pass is driven entirely by the
//! snapshot's own timestamp, so tests and the simulator can replay any
//! date range deterministically.

use std::io;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::achievements::{self, AchievementBook, EvalContext};
use crate::challenges::{
    self, Challenge, ChallengeError, ChallengeKind, ChallengeList, GroupChallengeList, Participant,
};
use crate::constants::{DEFAULT_DAILY_GOAL, MAX_DAILY_GOAL, MIN_DAILY_GOAL};
use crate::events::ProgressEvent;
use crate::metrics::{MetricHistory, MetricSnapshot};
use crate::player::{self, PlayerProgress};
use crate::quests::{self, QuestBoard};
use crate::season::{self, SeasonState};
use crate::store::{
    LoadOutcome, ProgressStore, ACHIEVEMENTS_FILE, CHALLENGES_FILE, GROUP_CHALLENGES_FILE,
    HISTORY_FILE, PLAYER_FILE, QUESTS_FILE, SEASONS_FILE, TOURNAMENT_FILE,
};
use crate::tournament::{self, TournamentState};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("persistence failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}

/// Tunable engine settings. The daily goal is clamped into its legal
/// range on every write.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    daily_goal: u32,
    premium: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL,
            premium: false,
        }
    }
}

impl EngineConfig {
    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    pub fn premium(&self) -> bool {
        self.premium
    }
}

pub struct ProgressEngine {
    store: ProgressStore,
    config: EngineConfig,
    player: PlayerProgress,
    history: MetricHistory,
    achievements: AchievementBook,
    quests: QuestBoard,
    challenges: ChallengeList,
    group_challenges: GroupChallengeList,
    tournament: TournamentState,
    seasons: SeasonState,
}

impl ProgressEngine {
    /// Loads every collection from the store, repairing what it can:
    /// achievement saves are merged with the current catalog, quest boards
    /// are deduplicated, group ranks are recomputed.
    pub fn load(store: ProgressStore) -> io::Result<Self> {
        let player = store.load(PLAYER_FILE)?.or_default();
        let history = store.load(HISTORY_FILE)?.or_default();

        let mut achievements = match store.load::<AchievementBook>(ACHIEVEMENTS_FILE)? {
            LoadOutcome::Loaded(book) => book,
            LoadOutcome::Absent | LoadOutcome::Corrupt => AchievementBook::new(),
        };
        achievements.sync_with_catalog();

        let mut quests: QuestBoard = store.load(QUESTS_FILE)?.or_default();
        quests.dedupe();

        let challenges = store.load(CHALLENGES_FILE)?.or_default();
        let mut group_challenges: GroupChallengeList =
            store.load(GROUP_CHALLENGES_FILE)?.or_default();
        group_challenges.rerank_all();

        let tournament = store.load(TOURNAMENT_FILE)?.or_default();
        let seasons = store.load(SEASONS_FILE)?.or_default();

        Ok(Self {
            store,
            config: EngineConfig::default(),
            player,
            history,
            achievements,
            quests,
            challenges,
            group_challenges,
            tournament,
            seasons,
        })
    }

    /// Engine over `~/.stepquest`.
    pub fn new() -> io::Result<Self> {
        Self::load(ProgressStore::new()?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_daily_goal(&mut self, goal: u32) {
        self.config.daily_goal = goal.clamp(MIN_DAILY_GOAL, MAX_DAILY_GOAL);
    }

    pub fn set_premium(&mut self, premium: bool) {
        self.config.premium = premium;
    }

    pub fn player(&self) -> &PlayerProgress {
        &self.player
    }

    pub fn history(&self) -> &MetricHistory {
        &self.history
    }

    pub fn achievements(&self) -> &AchievementBook {
        &self.achievements
    }

    pub fn quest_board(&self) -> &QuestBoard {
        &self.quests
    }

    pub fn challenges(&self) -> &ChallengeList {
        &self.challenges
    }

    pub fn group_challenges(&self) -> &GroupChallengeList {
        &self.group_challenges
    }

    pub fn tournament(&self) -> &TournamentState {
        &self.tournament
    }

    pub fn seasons(&self) -> &SeasonState {
        &self.seasons
    }

    /// Grants XP to the player and the season pass in one motion.
    fn grant_xp(&mut self, amount: u64, events: &mut Vec<ProgressEvent>) {
        if amount == 0 {
            return;
        }
        player::logic::add_xp(&mut self.player, amount, events);
        events.extend(season::logic::add_season_xp(&mut self.seasons, amount));
    }

    /// Applies one metric snapshot and returns everything that happened.
    ///
    /// Replaying the same snapshot is harmless: accumulators advance by
    /// deltas and every one-shot award carries a per-day claim guard.
    pub fn on_metrics(
        &mut self,
        snapshot: &MetricSnapshot,
        rng: &mut impl Rng,
    ) -> Result<Vec<ProgressEvent>, EngineError> {
        let now: DateTime<Utc> = snapshot.timestamp;
        let today: NaiveDate = snapshot.day();
        let mut events = Vec::new();

        season::logic::ensure_current(&mut self.seasons, today);

        // 1. Validate and fold into the day history.
        let (record, delta, rejections) = self.history.apply(snapshot);
        for rejection in &rejections {
            warn!(%rejection, "rejected metric field");
        }

        // 2. Lifetime accumulators and activity. A sample with every field
        // rejected carries no evidence of activity and counts nothing.
        if rejections.len() < 3 {
            player::logic::record_activity(&mut self.player, today);
        }
        self.player.lifetime_steps += u64::from(delta.steps);
        self.player.lifetime_distance_m += delta.distance_m;
        self.player.lifetime_calories += delta.calories;

        // 3. Step XP and day bonuses.
        let awards = self.player.awards_for(today);
        let step_xp = player::logic::daily_step_xp(awards, record.steps);
        let goal_xp =
            player::logic::daily_goal_bonus(awards, record.steps, self.config.daily_goal);
        self.grant_xp(step_xp + goal_xp, &mut events);

        // 4. Streak and milestones.
        let goal_reached_today = record.steps >= self.config.daily_goal;
        if goal_reached_today {
            player::logic::on_goal_reached(&mut self.player, today);
        }
        for (days, bonus) in player::logic::claim_streak_milestones(&mut self.player) {
            events.push(ProgressEvent::StreakMilestone {
                days,
                bonus_xp: bonus,
                title: format!("{days}-day streak"),
            });
            self.grant_xp(u64::from(bonus), &mut events);
        }

        // 5. Achievements.
        let ctx = EvalContext {
            today: &record,
            lifetime_steps: self.player.lifetime_steps,
            lifetime_distance_m: self.player.lifetime_distance_m,
            current_streak: self.player.current_streak,
            goal_reached_today,
            now,
            premium: self.config.premium,
        };
        let unlocked = achievements::logic::evaluate(&mut self.achievements, &ctx);
        let unlock_xp: u64 = unlocked
            .iter()
            .map(|e| match e {
                ProgressEvent::AchievementUnlocked { xp_bonus, .. } => u64::from(*xp_bonus),
                _ => 0,
            })
            .sum();
        events.extend(unlocked);
        self.grant_xp(unlock_xp, &mut events);

        // 6. Quests.
        if quests::logic::ensure_fresh(&mut self.quests, today, rng) {
            debug!(date = %today, "generated a fresh quest board");
        }
        let (quest_xp, quest_events) =
            quests::logic::update_progress(&mut self.quests, &record, self.config.premium);
        events.extend(quest_events);
        self.grant_xp(quest_xp, &mut events);

        // 7. Personal challenges.
        challenges::logic::archive_expired(&mut self.challenges, today);
        events.extend(challenges::logic::update_progress(
            &mut self.challenges,
            &record,
            self.player.current_streak,
            &self.history,
            now,
        ));

        // 8. Group challenges.
        self.group_challenges.archive_expired(today);
        events.extend(self.group_challenges.update_user_progress(
            &record,
            self.player.current_streak,
            &self.history,
        ));

        // 9. Tournament.
        let finished = tournament::logic::check_and_roll(&mut self.tournament, today, rng);
        let tournament_xp: u64 = finished
            .iter()
            .map(|e| match e {
                ProgressEvent::TournamentFinished { reward_xp, .. } => u64::from(*reward_xp),
                _ => 0,
            })
            .sum();
        events.extend(finished);
        self.grant_xp(tournament_xp, &mut events);
        tournament::logic::update_user_steps(&mut self.tournament, &self.history, today);

        self.persist()?;
        Ok(events)
    }

    /// Swaps a quest for a fresh same-tier one. Persists on success.
    pub fn refresh_quest(&mut self, quest_id: &str, rng: &mut impl Rng) -> Result<bool, EngineError> {
        let swapped = quests::logic::refresh_quest(&mut self.quests, quest_id, rng);
        if swapped {
            self.store.save(QUESTS_FILE, &self.quests)?;
        }
        Ok(swapped)
    }

    /// Starts a personal challenge beginning today.
    pub fn create_challenge(
        &mut self,
        kind: ChallengeKind,
        target: u64,
        duration_days: u32,
        today: NaiveDate,
    ) -> Result<Uuid, EngineError> {
        let challenge = Challenge::new(kind, target, duration_days, today)?;
        let id = challenge.id;
        self.challenges.active.push(challenge);
        self.store.save(CHALLENGES_FILE, &self.challenges)?;
        Ok(id)
    }

    /// Starts a group challenge beginning today. Premium-only.
    pub fn create_group_challenge(
        &mut self,
        name: &str,
        kind: ChallengeKind,
        target: u64,
        duration_days: u32,
        today: NaiveDate,
        friends: Vec<Participant>,
    ) -> Result<Uuid, EngineError> {
        let id = self.group_challenges.create(
            name,
            kind,
            target,
            duration_days,
            today,
            friends,
            self.config.premium,
        )?;
        self.store.save(GROUP_CHALLENGES_FILE, &self.group_challenges)?;
        Ok(id)
    }

    fn persist(&self) -> io::Result<()> {
        self.store.save(PLAYER_FILE, &self.player)?;
        self.store.save(HISTORY_FILE, &self.history)?;
        self.store.save(ACHIEVEMENTS_FILE, &self.achievements)?;
        self.store.save(QUESTS_FILE, &self.quests)?;
        self.store.save(CHALLENGES_FILE, &self.challenges)?;
        self.store.save(GROUP_CHALLENGES_FILE, &self.group_challenges)?;
        self.store.save(TOURNAMENT_FILE, &self.tournament)?;
        self.store.save(SEASONS_FILE, &self.seasons)
    }
}
