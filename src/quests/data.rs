//! Static quest pools. Distance requirements are in meters.

use super::types::{QuestDef, QuestKind};

pub const STANDARD_POOL: &[QuestDef] = &[
    QuestDef { id: "steps_5k", title: "Walk 5,000 steps", kind: QuestKind::Steps, requirement: 5_000, xp_reward: 50 },
    QuestDef { id: "steps_8k", title: "Walk 8,000 steps", kind: QuestKind::Steps, requirement: 8_000, xp_reward: 80 },
    QuestDef { id: "steps_10k", title: "Walk 10,000 steps", kind: QuestKind::Steps, requirement: 10_000, xp_reward: 100 },
    QuestDef { id: "steps_12k", title: "Walk 12,000 steps", kind: QuestKind::Steps, requirement: 12_000, xp_reward: 120 },
    QuestDef { id: "distance_3km", title: "Cover 3 km", kind: QuestKind::DistanceMeters, requirement: 3_000, xp_reward: 60 },
    QuestDef { id: "distance_5km", title: "Cover 5 km", kind: QuestKind::DistanceMeters, requirement: 5_000, xp_reward: 100 },
    QuestDef { id: "calories_200", title: "Burn 200 calories", kind: QuestKind::Calories, requirement: 200, xp_reward: 50 },
    QuestDef { id: "calories_400", title: "Burn 400 calories", kind: QuestKind::Calories, requirement: 400, xp_reward: 100 },
];

/// Harder quests with bigger rewards, shown only to premium profiles.
pub const PREMIUM_POOL: &[QuestDef] = &[
    QuestDef { id: "steps_15k", title: "Walk 15,000 steps", kind: QuestKind::Steps, requirement: 15_000, xp_reward: 200 },
    QuestDef { id: "steps_20k", title: "Walk 20,000 steps", kind: QuestKind::Steps, requirement: 20_000, xp_reward: 300 },
    QuestDef { id: "distance_10km", title: "Cover 10 km", kind: QuestKind::DistanceMeters, requirement: 10_000, xp_reward: 250 },
    QuestDef { id: "calories_600", title: "Burn 600 calories", kind: QuestKind::Calories, requirement: 600, xp_reward: 200 },
];
