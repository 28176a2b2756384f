// src/models/leaderboard.rs

use serde::{Deserialize, Serialize};

/// One (student, class) performance record, persisted across sessions.
///
/// Identity is the (name, class) pair: resubmission updates the existing
/// entry in place. `out_of` is the quiz length at the most recent grading,
/// so it can change meaning when quiz length changes between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub class: String,
    pub score: u32,
    pub out_of: u32,
}

/// Aggregated struct for displaying one class on the leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub class: String,
    pub average: f64,
    pub top_students: Vec<TopStudent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopStudent {
    pub name: String,
    pub score: u32,
}
