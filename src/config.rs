/// Startup configuration, built once and passed by reference.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::entities::Difficulty;

pub const DEFAULT_FRAME_MS: u64 = 33; // ≈30 FPS
pub const DEFAULT_EASY_SPAWN_MS: u64 = 4_000;
pub const DEFAULT_HARD_SPAWN_MS: u64 = 2_500;
pub const DEFAULT_GAME_OVER_PAUSE_MS: u64 = 2_000;

const SCORES_FILE_NAME: &str = ".meditating_ninja_scores";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub frame: Duration,
    pub easy_spawn_interval: Duration,
    pub hard_spawn_interval: Duration,
    /// How long the screen freezes after an enemy reaches the ninja.
    pub game_over_pause: Duration,
    pub leaderboard_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
            easy_spawn_interval: Duration::from_millis(DEFAULT_EASY_SPAWN_MS),
            hard_spawn_interval: Duration::from_millis(DEFAULT_HARD_SPAWN_MS),
            game_over_pause: Duration::from_millis(DEFAULT_GAME_OVER_PAUSE_MS),
            leaderboard_path: default_leaderboard_path(),
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `NINJA_*` environment variables.
    pub fn from_env() -> Self {
        let leaderboard_path = env::var_os("NINJA_SCORES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_leaderboard_path);

        GameConfig {
            frame: read_env_ms("NINJA_FRAME_MS", DEFAULT_FRAME_MS),
            easy_spawn_interval: read_env_ms("NINJA_EASY_SPAWN_MS", DEFAULT_EASY_SPAWN_MS),
            hard_spawn_interval: read_env_ms("NINJA_HARD_SPAWN_MS", DEFAULT_HARD_SPAWN_MS),
            game_over_pause: read_env_ms("NINJA_GAME_OVER_PAUSE_MS", DEFAULT_GAME_OVER_PAUSE_MS),
            leaderboard_path,
        }
    }

    pub fn spawn_interval(&self, difficulty: Difficulty) -> Duration {
        match difficulty {
            Difficulty::Easy => self.easy_spawn_interval,
            Difficulty::Hard => self.hard_spawn_interval,
        }
    }
}

fn default_leaderboard_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(SCORES_FILE_NAME)
}

fn read_env_ms(name: &str, default: u64) -> Duration {
    let millis = match env::var(name) {
        Ok(value) => match value.parse::<u64>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                tracing::warn!("{}={:?} is not a positive integer, using {}", name, value, default);
                default
            }
        },
        Err(_) => default,
    };
    Duration::from_millis(millis)
}
