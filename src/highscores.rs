//! Best rounds of a session
//!
//! Filled in by [`crate::sim::Session::end_round`] and kept across restarts.
//! In memory only.

use serde::{Deserialize, Serialize};

/// Rounds kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// 1-based round number within the session
    pub round: u32,
    /// How long the round lasted, in simulation ticks
    pub ticks: u64,
}

/// Finished rounds, best first. Equal scores keep the earlier round on top.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round. Returns its 1-based place on the board, or
    /// `None` when the score is zero or too low for a full board.
    pub fn add_score(&mut self, score: u64, round: u32, ticks: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let index = self.entries.partition_point(|e| e.score >= score);
        if index >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(index, HighScoreEntry { score, round, ticks });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
