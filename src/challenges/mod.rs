//! Personal and group challenges.

pub mod group;
pub mod logic;
pub mod types;

pub use group::{GroupChallenge, GroupChallengeList, Participant};
pub use types::{Challenge, ChallengeError, ChallengeKind, ChallengeList};
