//! Quest definitions and the persisted daily board.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which metric a quest tracks. Distance requirements are in meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestKind {
    Steps,
    DistanceMeters,
    Calories,
}

/// One row of a quest pool.
pub struct QuestDef {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: QuestKind,
    pub requirement: u32,
    pub xp_reward: u32,
}

/// A quest instance on today's board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub kind: QuestKind,
    pub requirement: u32,
    pub xp_reward: u32,
    pub premium: bool,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    pub fn from_def(def: &QuestDef, premium: bool) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            kind: def.kind,
            requirement: def.requirement,
            xp_reward: def.xp_reward,
            premium,
            progress: 0,
            completed: false,
        }
    }
}

/// The persisted board: the generation date plus the day's quests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestBoard {
    pub generated_on: Option<NaiveDate>,
    pub quests: Vec<Quest>,
}

impl QuestBoard {
    /// Drops duplicate quest ids, keeping the first occurrence. Old save
    /// files written by buggy builds can contain repeats.
    pub fn dedupe(&mut self) {
        let mut seen = Vec::new();
        self.quests.retain(|q| {
            if seen.contains(&q.id) {
                false
            } else {
                seen.push(q.id.clone());
                true
            }
        });
    }

    pub fn holds(&self, id: &str) -> bool {
        self.quests.iter().any(|q| q.id == id)
    }
}
