//! Achievement evaluation over the current sample.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::events::ProgressEvent;
use crate::metrics::DailyRecord;

use super::types::{AchievementBook, AchievementDef, Rule};

/// Everything a single evaluation pass can look at.
///
/// Time-of-day and calendar rules poll `now` directly; they fire only when
/// a sample arrives while the condition holds, never retroactively from
/// history.
pub struct EvalContext<'a> {
    pub today: &'a DailyRecord,
    pub lifetime_steps: u64,
    pub lifetime_distance_m: f64,
    pub current_streak: u32,
    pub goal_reached_today: bool,
    pub now: DateTime<Utc>,
    pub premium: bool,
}

impl EvalContext<'_> {
    fn current_value(&self, rule: &Rule) -> u64 {
        match *rule {
            Rule::DailySteps(_) => u64::from(self.today.steps),
            Rule::TotalSteps(_) => self.lifetime_steps,
            Rule::StreakDays(_) => u64::from(self.current_streak),
            Rule::DailyCalories(_) => self.today.calories.max(0.0) as u64,
            Rule::TotalDistanceM(_) => self.lifetime_distance_m.max(0.0) as u64,
            Rule::StepsBefore { hour, .. } => {
                if self.now.hour() < hour {
                    u64::from(self.today.steps)
                } else {
                    0
                }
            }
            Rule::StepsAfter { hour, .. } => {
                if self.now.hour() >= hour {
                    u64::from(self.today.steps)
                } else {
                    0
                }
            }
            Rule::StepsOnMonday(_) => {
                if self.now.weekday() == Weekday::Mon {
                    u64::from(self.today.steps)
                } else {
                    0
                }
            }
            Rule::StepsOnWeekend(_) => {
                if matches!(self.now.weekday(), Weekday::Sat | Weekday::Sun) {
                    u64::from(self.today.steps)
                } else {
                    0
                }
            }
            Rule::CalendarDay { month, day } => {
                if self.now.month() == month && self.now.day() == day && self.goal_reached_today {
                    1
                } else {
                    0
                }
            }
        }
    }
}

/// Updates progress on every locked entry and unlocks those whose rule is
/// met. Unlocks are monotonic: nothing here ever re-locks an entry. A
/// locked entry's progress mirrors the latest sample, so a smaller later
/// reading rewinds it.
pub fn evaluate(book: &mut AchievementBook, ctx: &EvalContext<'_>) -> Vec<ProgressEvent> {
    let mut events = Vec::new();

    for entry in &mut book.entries {
        if entry.unlocked {
            continue;
        }
        let Some(def) = AchievementDef::by_id(&entry.id) else {
            continue;
        };
        if def.premium && !ctx.premium {
            continue;
        }

        let requirement = def.rule.requirement();
        let current = ctx.current_value(&def.rule);
        entry.progress = current.min(requirement);

        if current >= requirement {
            entry.unlocked = true;
            entry.unlocked_at = Some(ctx.now);
            events.push(ProgressEvent::AchievementUnlocked {
                id: def.id,
                title: def.title,
                rarity: def.rarity,
                xp_bonus: def.rarity.xp_bonus(),
            });
        }
    }

    events
}
