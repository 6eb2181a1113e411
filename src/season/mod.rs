//! Quarterly seasons with a 10-level reward pass.

pub mod logic;
pub mod types;

pub use types::{RewardKind, Season, SeasonReward, SeasonState, SeasonTheme};
