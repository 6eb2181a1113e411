//! Daily quest board: rotating pick from static pools.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{PREMIUM_POOL, STANDARD_POOL};
pub use types::{Quest, QuestBoard, QuestDef, QuestKind};
