//! Achievement catalog, unlock state and evaluation.

pub mod data;
pub mod logic;
pub mod types;

pub use data::CATALOG;
pub use logic::EvalContext;
pub use types::{AchievementBook, AchievementDef, AchievementState, Category, Rarity, Rule};
