//! JSON persistence: one pretty-printed document per collection under a
//! home dot-directory (`~/.stepquest/` by default).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub const PLAYER_FILE: &str = "player.json";
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
pub const QUESTS_FILE: &str = "quests.json";
pub const CHALLENGES_FILE: &str = "challenges.json";
pub const GROUP_CHALLENGES_FILE: &str = "group_challenges.json";
pub const TOURNAMENT_FILE: &str = "tournament.json";
pub const SEASONS_FILE: &str = "seasons.json";
pub const HISTORY_FILE: &str = "history.json";

/// What loading a collection produced. A corrupt file is reported rather
/// than silently treated as absent so callers can decide to start fresh
/// while the broken file is still on disk for inspection.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Absent,
    Corrupt,
}

impl<T: Default> LoadOutcome<T> {
    /// The loaded value, or a default for absent and corrupt files.
    pub fn or_default(self) -> T {
        match self {
            LoadOutcome::Loaded(value) => value,
            LoadOutcome::Absent | LoadOutcome::Corrupt => T::default(),
        }
    }
}

/// Directory-backed store for every persisted collection.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    dir: PathBuf,
}

impl ProgressStore {
    /// Store rooted at `~/.stepquest`.
    pub fn new() -> io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine home directory",
            )
        })?;
        Ok(Self {
            dir: home.join(".stepquest"),
        })
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Loads one collection. Missing files are `Absent`; unreadable JSON is
    /// `Corrupt` and logged.
    pub fn load<T: DeserializeOwned>(&self, file: &str) -> io::Result<LoadOutcome<T>> {
        let path = self.path(file);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(LoadOutcome::Absent),
            Err(err) => return Err(err),
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(LoadOutcome::Loaded(value)),
            Err(err) => {
                warn!(file, %err, "save file is corrupt, starting this collection fresh");
                Ok(LoadOutcome::Corrupt)
            }
        }
    }

    /// Saves one collection as pretty JSON, creating the directory first.
    pub fn save<T: Serialize>(&self, file: &str, value: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.path(file), json)
    }
}
