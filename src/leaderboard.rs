//! Leaderboard
//!
//! Persisted to LocalStorage alongside the current user, keeps the top 10 runs.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_LEADERBOARD_ENTRIES;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
}

/// Score table, sorted descending by score
///
/// Serializes as a bare JSON array. The same username may hold several slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a run.
    ///
    /// The entry is appended, the table re-sorted descending and cut back to
    /// [`MAX_LEADERBOARD_ENTRIES`]. Ties keep insertion order, so a new entry
    /// equal to the 10th score is the one dropped.
    pub fn record(&mut self, username: impl Into<String>, score: i64) {
        self.entries.push(LeaderboardEntry {
            username: username.into(),
            score,
        });

        // Stable sort
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_LEADERBOARD_ENTRIES);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild from raw entries, restoring order and size limits
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.entries.sort_by(|a, b| b.score.cmp(&a.score));
        board.entries.truncate(MAX_LEADERBOARD_ENTRIES);
        board
    }
}
