//! Headless progression simulator.
//!
//! Feeds N synthetic days of metrics through a fresh engine and prints a
//! summary, useful for eyeballing balance changes.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --days N     Days to simulate (default: 30)
//!   --seed N     RNG seed (default: 42)
//!   --premium    Simulate a premium profile

use std::env;
use std::process;

use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stepquest::{MetricSnapshot, ProgressEngine, ProgressEvent, ProgressStore};
use tracing_subscriber::EnvFilter;

struct SimConfig {
    days: u32,
    seed: u64,
    premium: bool,
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig {
        days: 30,
        seed: 42,
        premium: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--days" => {
                if i + 1 < args.len() {
                    config.days = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(42);
                    i += 1;
                }
            }
            "--premium" => config.premium = true,
            other => {
                eprintln!("unknown option: {other}");
                process::exit(2);
            }
        }
        i += 1;
    }
    config
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    // Simulations run against a scratch directory, never the real profile.
    let scratch = env::temp_dir().join(format!("stepquest-sim-{}", process::id()));
    let store = ProgressStore::with_dir(&scratch);
    let mut engine = match ProgressEngine::load(store) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("could not initialize the engine: {err}");
            process::exit(1);
        }
    };
    engine.set_premium(config.premium);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let start = Utc.with_ymd_and_hms(2025, 1, 6, 20, 0, 0).unwrap();

    println!("Simulating {} days (seed {})...", config.days, config.seed);
    println!();

    let mut level_ups = 0u32;
    let mut achievements = 0u32;
    let mut quests_done = 0u32;
    let mut tournaments = 0u32;

    for day in 0..config.days {
        let steps: u32 = rng.gen_range(2_000..=18_000);
        let snapshot = MetricSnapshot {
            steps,
            distance_m: f64::from(steps) * 0.7,
            calories: f64::from(steps) * 0.04,
            timestamp: start + Duration::days(i64::from(day)),
        };

        let events = match engine.on_metrics(&snapshot, &mut rng) {
            Ok(events) => events,
            Err(err) => {
                eprintln!("day {day}: {err}");
                process::exit(1);
            }
        };

        for event in &events {
            match event {
                ProgressEvent::LevelUp { new_level } => {
                    level_ups += 1;
                    println!("day {day:>3}: level up -> {new_level}");
                }
                ProgressEvent::RankUp { new_rank } => {
                    println!("day {day:>3}: rank up -> {new_rank}");
                }
                ProgressEvent::AchievementUnlocked { title, .. } => {
                    achievements += 1;
                    println!("day {day:>3}: achievement \"{title}\"");
                }
                ProgressEvent::QuestCompleted { title, xp_reward, .. } => {
                    quests_done += 1;
                    println!("day {day:>3}: quest \"{title}\" (+{xp_reward} XP)");
                }
                ProgressEvent::StreakMilestone { days, bonus_xp, .. } => {
                    println!("day {day:>3}: {days}-day streak (+{bonus_xp} XP)");
                }
                ProgressEvent::TournamentFinished { rank, reward_xp, title, .. } => {
                    tournaments += 1;
                    println!("day {day:>3}: tournament finished rank {rank}, {title} (+{reward_xp} XP)");
                }
                _ => {}
            }
        }
    }

    let player = engine.player();
    println!();
    println!("=== Summary ===");
    println!("Level:          {} ({})", player.level, player.rank);
    println!("Total XP:       {}", player.total_xp);
    println!("Lifetime steps: {}", player.lifetime_steps);
    println!("Longest streak: {} days", player.longest_streak);
    println!("Level-ups:      {level_ups}");
    println!("Achievements:   {achievements} / {}", engine.achievements().entries.len());
    println!("Quests done:    {quests_done}");
    println!("Tournaments:    {tournaments}");
    println!("Season level:   {}", engine.seasons().season_level.max(1));

    let _ = std::fs::remove_dir_all(&scratch);
}
