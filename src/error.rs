use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("cannot access leaderboard file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("leaderboard line {line} is not a score: {content:?}")]
    Malformed { line: usize, content: String },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}
