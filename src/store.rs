// src/store.rs

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error::AppError, models::leaderboard::LeaderboardEntry};

/// Where the loaded entries came from, so callers can tell "no leaderboard
/// yet" from "leaderboard unreadable". Both of the empty cases are served as
/// an empty list; corruption is additionally logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Present,
    Absent,
    Corrupt,
}

#[derive(Debug)]
pub struct LoadedLeaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub status: LoadStatus,
}

/// Flat-file leaderboard: one JSON array of entries, rewritten whole on
/// every save. The mutex serializes load-modify-save cycles between
/// concurrent grading passes in this process; cross-process writers remain
/// last-writer-wins.
#[derive(Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn load(&self) -> LoadedLeaderboard {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return LoadedLeaderboard {
                    entries: Vec::new(),
                    status: LoadStatus::Absent,
                };
            }
            Err(e) => {
                tracing::warn!("Leaderboard file unreadable, serving empty: {}", e);
                return LoadedLeaderboard {
                    entries: Vec::new(),
                    status: LoadStatus::Corrupt,
                };
            }
        };

        match serde_json::from_str::<Vec<LeaderboardEntry>>(&raw) {
            Ok(entries) => LoadedLeaderboard {
                entries,
                status: LoadStatus::Present,
            },
            Err(e) => {
                tracing::warn!("Leaderboard file corrupt, serving empty: {}", e);
                LoadedLeaderboard {
                    entries: Vec::new(),
                    status: LoadStatus::Corrupt,
                }
            }
        }
    }

    pub async fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), AppError> {
        let json = serde_json::to_string(entries)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Upserts the (name, class) entry with the final score of one grading
    /// pass. One call per submission, after grading completes.
    pub async fn record_score(
        &self,
        name: &str,
        class: &str,
        score: u32,
        out_of: u32,
    ) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await.entries;

        match entries
            .iter_mut()
            .find(|e| e.name == name && e.class == class)
        {
            Some(entry) => {
                entry.score = score;
                entry.out_of = out_of;
            }
            None => entries.push(LeaderboardEntry {
                name: name.to_string(),
                class: class.to_string(),
                score,
                out_of,
            }),
        }

        self.save(&entries).await
    }
}
