//! High score leaderboard
//!
//! Tracks the top 10 finished sessions of this process. Nothing is written
//! to disk; the table is gone when the game exits.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Net score
    pub score: i32,
    /// Which session of this process (1-based)
    pub session: u32,
    pub catches: u32,
    pub avoids: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
    /// Sessions recorded, including those that did not make the table
    pub sessions_played: u32,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: i32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished session.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn record(&mut self, state: &GameState, session: u32) -> Option<usize> {
        self.sessions_played += 1;
        if !self.qualifies(state.score) {
            return None;
        }

        let entry = HighScoreEntry {
            score: state.score,
            session,
            catches: state.catches,
            avoids: state.avoids,
        };

        // Sorted descending by score; ties keep the earlier session first
        let pos = self.entries.iter().position(|e| entry.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<i32> {
        self.entries.first().map(|e| e.score)
    }

    /// One-line summary for the exit log
    pub fn summary(&self) -> String {
        match self.top_score() {
            Some(best) => format!(
                "{} session(s) played, best score {}",
                self.sessions_played, best
            ),
            None => "no sessions finished".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::time::Duration;

    fn finished(score: i32) -> GameState {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut state = GameState::new(&Tuning::default(), &mut rng, Duration::ZERO, 0);
        state.score = score;
        state
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(&finished(3), 1), Some(1));
        assert_eq!(scores.record(&finished(7), 2), Some(1));
        assert_eq!(scores.record(&finished(-2), 3), Some(3));
        assert_eq!(scores.record(&finished(3), 4), Some(3));

        let ordered: Vec<(i32, u32)> = scores.entries.iter().map(|e| (e.score, e.session)).collect();
        assert_eq!(ordered, vec![(7, 2), (3, 1), (3, 4), (-2, 3)]);
        assert_eq!(scores.top_score(), Some(7));
    }

    #[test]
    fn test_table_is_capped() {
        let mut scores = HighScores::new();
        for i in 0..MAX_HIGH_SCORES as i32 {
            scores.record(&finished(i + 1), i as u32 + 1);
        }
        assert!(!scores.qualifies(0));
        assert_eq!(scores.record(&finished(0), 99), None);
        assert_eq!(scores.record(&finished(50), 100), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.sessions_played, 12);
    }

    #[test]
    fn test_summary() {
        let mut scores = HighScores::new();
        assert_eq!(scores.summary(), "no sessions finished");
        scores.record(&finished(4), 1);
        assert_eq!(scores.summary(), "1 session(s) played, best score 4");
    }
}
