//! Group challenges: a shared team target with ranked members.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::ProgressEvent;
use crate::metrics::{DailyRecord, MetricHistory};

use super::logic::metric_value;
use super::types::{ChallengeError, ChallengeKind};

/// The id the local profile uses in participant lists.
pub const LOCAL_USER_ID: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub progress: u64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub rank: u32,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            progress: 0,
            completed: false,
            rank: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupChallenge {
    pub id: Uuid,
    pub name: String,
    pub kind: ChallengeKind,
    pub target: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub creator: String,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub completed: bool,
}

impl GroupChallenge {
    /// Sum of every member's progress; the team completes when this
    /// reaches the shared target.
    pub fn total_progress(&self) -> u64 {
        self.participants.iter().map(|p| p.progress).sum()
    }

    /// Sorts members by `(progress desc, name asc)` and walks the list
    /// assigning `index + 1` whenever progress strictly drops below the
    /// previous member, otherwise inheriting the running rank. Ties share
    /// a rank and the next distinct progress skips past them, so three
    /// members at 100/100/50 rank 1, 1, 3.
    pub fn update_ranks(&mut self) {
        self.participants.sort_by(|a, b| {
            b.progress
                .cmp(&a.progress)
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut current_rank = 1;
        let mut previous: Option<u64> = None;
        for (index, participant) in self.participants.iter_mut().enumerate() {
            if let Some(prev) = previous {
                if participant.progress < prev {
                    current_rank = index as u32 + 1;
                }
            }
            participant.rank = current_rank;
            previous = Some(participant.progress);
        }
    }

    /// Sets a member's progress and reranks. Returns whether the team
    /// target was newly reached.
    pub fn set_progress(&mut self, participant_id: &str, progress: u64) -> bool {
        let Some(member) = self
            .participants
            .iter_mut()
            .find(|p| p.id == participant_id)
        else {
            return false;
        };
        member.progress = progress;
        if progress >= self.target {
            member.completed = true;
        }
        self.update_ranks();

        if !self.completed && self.total_progress() >= self.target {
            self.completed = true;
            return true;
        }
        false
    }
}

/// Persisted group challenge collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupChallengeList {
    pub active: Vec<GroupChallenge>,
    pub completed: Vec<GroupChallenge>,
}

impl GroupChallengeList {
    /// Ranks can be stale in old save files; recompute on load.
    pub fn rerank_all(&mut self) {
        for challenge in self.active.iter_mut().chain(self.completed.iter_mut()) {
            challenge.update_ranks();
        }
    }

    /// Creates a group challenge. Premium-only.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        name: impl Into<String>,
        kind: ChallengeKind,
        target: u64,
        duration_days: u32,
        today: NaiveDate,
        friends: Vec<Participant>,
        premium_entitled: bool,
    ) -> Result<Uuid, ChallengeError> {
        if !premium_entitled {
            return Err(ChallengeError::PremiumRequired);
        }
        if target == 0 {
            return Err(ChallengeError::ZeroTarget);
        }

        let mut participants = vec![Participant::new(LOCAL_USER_ID, "You")];
        participants.extend(friends);

        let mut challenge = GroupChallenge {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            target,
            start_date: today,
            end_date: today + chrono::Duration::days(i64::from(duration_days)),
            creator: LOCAL_USER_ID.to_string(),
            participants,
            completed: false,
        };
        challenge.update_ranks();

        let id = challenge.id;
        self.active.push(challenge);
        Ok(id)
    }

    /// Applies the local user's metrics to every active group challenge
    /// and moves newly completed ones to the completed list.
    pub fn update_user_progress(
        &mut self,
        record: &DailyRecord,
        streak: u32,
        history: &MetricHistory,
    ) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        let today = record.date;

        for challenge in &mut self.active {
            let window_end = today.min(challenge.end_date);
            let value = metric_value(
                challenge.kind,
                record,
                streak,
                history,
                challenge.start_date,
                window_end,
            );
            if challenge.set_progress(LOCAL_USER_ID, value) {
                events.push(ProgressEvent::GroupChallengeCompleted {
                    id: challenge.id,
                    name: challenge.name.clone(),
                });
            }
        }

        let done: Vec<_> = self.active.iter().filter(|c| c.completed).cloned().collect();
        self.completed.extend(done);
        self.active.retain(|c| !c.completed);

        events
    }

    /// Archives past-deadline challenges that never hit the team target.
    pub fn archive_expired(&mut self, today: NaiveDate) {
        let expired: Vec<_> = self
            .active
            .iter()
            .filter(|c| today > c.end_date)
            .cloned()
            .collect();
        self.completed.extend(expired);
        self.active.retain(|c| today <= c.end_date);
    }
}
