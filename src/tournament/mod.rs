//! Weekly step tournaments against a synthetic field.

pub mod logic;
pub mod types;

pub use logic::week_start;
pub use types::{Competitor, Tournament, TournamentResult, TournamentState};
