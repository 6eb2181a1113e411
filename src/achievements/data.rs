//! The static achievement catalog.

use super::types::{AchievementDef, Category, Rarity, Rule};

macro_rules! def {
    ($id:literal, $title:literal, $desc:literal, $cat:ident, $rarity:ident, $rule:expr) => {
        AchievementDef {
            id: $id,
            title: $title,
            description: $desc,
            category: Category::$cat,
            rarity: Rarity::$rarity,
            rule: $rule,
            premium: false,
        }
    };
    ($id:literal, $title:literal, $desc:literal, $cat:ident, $rarity:ident, $rule:expr, premium) => {
        AchievementDef {
            id: $id,
            title: $title,
            description: $desc,
            category: Category::$cat,
            rarity: Rarity::$rarity,
            rule: $rule,
            premium: true,
        }
    };
}

pub const CATALOG: &[AchievementDef] = &[
    // Daily steps
    def!("first_steps", "First Steps", "Walk your first 1,000 steps in a day", Steps, Common, Rule::DailySteps(1_000)),
    def!("step_5k", "Active Day", "Walk 5,000 steps in a day", Steps, Common, Rule::DailySteps(5_000)),
    def!("step_10k", "True Walker", "Walk 10,000 steps in a day", Steps, Rare, Rule::DailySteps(10_000)),
    def!("step_15k", "Tireless", "Walk 15,000 steps in a day", Steps, Epic, Rule::DailySteps(15_000)),
    def!("step_20k", "Marathoner", "Walk 20,000 steps in a day", Steps, Epic, Rule::DailySteps(20_000)),
    def!("step_25k", "Super Walker", "Walk 25,000 steps in a day", Steps, Epic, Rule::DailySteps(25_000)),
    def!("step_30k", "Ultra Walker", "Walk 30,000 steps in a day", Steps, Epic, Rule::DailySteps(30_000)),
    def!("step_50k", "Ultramarathon", "Walk 50,000 steps in a day", Steps, Legendary, Rule::DailySteps(50_000)),
    def!("step_100k", "100K Master", "Walk 100,000 steps in a day", Steps, Legendary, Rule::DailySteps(100_000), premium),
    def!("step_million", "Step Millionaire", "Accumulate 1,000,000 lifetime steps", Steps, Legendary, Rule::TotalSteps(1_000_000)),
    // Streaks
    def!("streak_3", "Hat Trick", "Reach your goal 3 days in a row", Streak, Common, Rule::StreakDays(3)),
    def!("streak_7", "Week of Power", "Reach your goal 7 days in a row", Streak, Rare, Rule::StreakDays(7)),
    def!("streak_14", "Iron Will", "Reach your goal 14 days in a row", Streak, Epic, Rule::StreakDays(14)),
    def!("streak_30", "Champion's Month", "Reach your goal 30 days in a row", Streak, Epic, Rule::StreakDays(30)),
    def!("streak_100", "100-Day Legend", "Reach your goal 100 days in a row", Streak, Legendary, Rule::StreakDays(100)),
    def!("streak_200", "200-Day Legend", "Reach your goal 200 days in a row", Streak, Legendary, Rule::StreakDays(200), premium),
    def!("streak_365", "Year-Long Titan", "Reach your goal 365 days in a row", Streak, Legendary, Rule::StreakDays(365)),
    def!("streak_500", "500 Days Immortal", "Reach your goal 500 days in a row", Streak, Legendary, Rule::StreakDays(500), premium),
    // Distance
    def!("distance_moon", "To the Moon", "Walk 384,400 km over your lifetime", Distance, Legendary, Rule::TotalDistanceM(384_400_000)),
    // Calories
    def!("calories_1000", "Burner", "Burn 1,000 calories in a day", Calories, Rare, Rule::DailyCalories(1_000)),
    def!("calories_2500", "Inferno", "Burn 2,500 calories in a day", Calories, Epic, Rule::DailyCalories(2_500)),
    // Time of day
    def!("early_bird", "Early Bird", "Walk 1,000 steps before 7 AM", Time, Common, Rule::StepsBefore { hour: 7, steps: 1_000 }),
    def!("night_owl", "Night Owl", "Walk 1,000 steps after 10 PM", Time, Rare, Rule::StepsAfter { hour: 22, steps: 1_000 }),
    def!("monday_motivation", "Monday Drive", "Walk 10,000 steps on a Monday", Time, Rare, Rule::StepsOnMonday(10_000)),
    def!("weekend_warrior", "Weekend Warrior", "Walk 15,000 steps on a weekend day", Time, Rare, Rule::StepsOnWeekend(15_000)),
    // Calendar
    def!("new_year_walker", "New Year Walker", "Reach your goal on January 1st", Special, Legendary, Rule::CalendarDay { month: 1, day: 1 }),
    def!("christmas_walk", "Christmas Stroll", "Reach your goal on December 25th", Special, Rare, Rule::CalendarDay { month: 12, day: 25 }),
    def!("valentine_steps", "Valentine Steps", "Reach your goal on February 14th", Special, Rare, Rule::CalendarDay { month: 2, day: 14 }),
];
