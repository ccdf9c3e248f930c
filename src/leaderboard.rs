/// File-backed best-score-per-name leaderboard.
///
/// On disk the file is plain text: a name line followed by a score line, one
/// pair per player, nothing else.  The name → score mapping is the durable
/// truth; display order is recomputed on every load.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::LeaderboardError;

/// How many entries the high-scores screen lists.
pub const TOP_N: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Leaderboard {
    path: PathBuf,
    players: BTreeMap<String, i64>,
    /// Names ordered by score, best first; ties by name.
    ranking: Vec<String>,
}

impl Leaderboard {
    /// Load the leaderboard at `path`.  A missing file is an empty board.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let path = path.as_ref().to_path_buf();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no leaderboard file yet, starting empty");
                String::new()
            }
            Err(source) => return Err(LeaderboardError::Io { path, source }),
        };

        let players = parse(&contents)?;
        let ranking = rank(&players);
        tracing::debug!(path = %path.display(), players = players.len(), "leaderboard loaded");
        Ok(Leaderboard {
            path,
            players,
            ranking,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn best_score(&self, name: &str) -> Option<i64> {
        self.players.get(name).copied()
    }

    /// Every (name, score) pair, best first.
    pub fn ranked(&self) -> Vec<(String, i64)> {
        self.ranking
            .iter()
            .filter_map(|name| self.players.get(name).map(|score| (name.clone(), *score)))
            .collect()
    }

    pub fn top(&self, n: usize) -> Vec<(String, i64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Record `score` for `name` if it beats their stored best (ties keep
    /// the old record).  Returns whether the file was rewritten.
    pub fn submit(&mut self, name: &str, score: i64) -> Result<bool, LeaderboardError> {
        if let Some(&best) = self.players.get(name) {
            if best >= score {
                return Ok(false);
            }
        }

        self.players.insert(name.to_string(), score);
        self.save()?;
        *self = Self::open(&self.path)?;
        tracing::info!(name, score, "new personal best saved");
        Ok(true)
    }

    fn save(&self) -> Result<(), LeaderboardError> {
        let mut out = String::new();
        for (name, score) in &self.players {
            out.push_str(name);
            out.push('\n');
            out.push_str(&score.to_string());
            out.push('\n');
        }
        fs::write(&self.path, out).map_err(|source| LeaderboardError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Pairs of (name, score) lines.  A trailing name without a score is ignored.
fn parse(contents: &str) -> Result<BTreeMap<String, i64>, LeaderboardError> {
    let lines: Vec<&str> = contents.lines().collect();
    let mut players = BTreeMap::new();
    for (i, pair) in lines.chunks_exact(2).enumerate() {
        let score = pair[1]
            .trim()
            .parse::<i64>()
            .map_err(|_| LeaderboardError::Malformed {
                line: i * 2 + 2,
                content: pair[1].to_string(),
            })?;
        players.insert(pair[0].to_string(), score);
    }
    Ok(players)
}

fn rank(players: &BTreeMap<String, i64>) -> Vec<String> {
    let mut ranking: Vec<(&String, &i64)> = players.iter().collect();
    // BTreeMap iteration is already name-ordered; a stable sort keeps that for ties.
    ranking.sort_by(|a, b| b.1.cmp(a.1));
    ranking.into_iter().map(|(name, _)| name.clone()).collect()
}
