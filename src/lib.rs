//! StepQuest - progression rules engine for a step-tracking game.
//!
//! A headless library: it turns a stream of day-cumulative metric
//! snapshots into XP, levels, ranks, streaks, achievements, daily quests,
//! challenges, weekly tournaments and season pass progress, persisting
//! everything as JSON documents. Presentation is someone else's problem;
//! the engine reports what happened through [`events::ProgressEvent`].

pub mod achievements;
pub mod challenges;
pub mod constants;
pub mod engine;
pub mod events;
pub mod metrics;
pub mod player;
pub mod quests;
pub mod season;
pub mod store;
pub mod tournament;

pub use engine::{EngineConfig, EngineError, ProgressEngine};
pub use events::ProgressEvent;
pub use metrics::MetricSnapshot;
pub use store::ProgressStore;
