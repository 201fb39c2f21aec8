//! Play state for one puzzle: the path being traced and the words found.

use crate::{find_match, MatchPolicy, Puzzle, WordPath, WordPathPosition};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Which path is stored when a word is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoundRecord {
    /// The placement recorded at generation time
    #[default]
    Solution,
    /// The cells the player actually traced
    Candidate,
}

/// Effect of extending the traced path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathUpdate {
    /// The cell was appended
    Extended,
    /// The player moved back onto the previous cell; the last cell was dropped
    Retracted,
    /// Not tracing, not adjacent to the last cell, or already on the path
    Ignored,
}

/// Result of releasing the traced path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    Found { index: usize, word: String },
    AlreadyFound { index: usize },
    NoMatch,
}

/// A puzzle being played
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    seed: u64,
    policy: MatchPolicy,
    found_record: FoundRecord,
    candidate: WordPath,
    pathing: bool,
    found: HashMap<String, WordPath>,
    started_at: Instant,
}

impl Session {
    pub fn new(puzzle: Puzzle, seed: u64) -> Self {
        Self {
            puzzle,
            seed,
            policy: MatchPolicy::default(),
            found_record: FoundRecord::default(),
            candidate: Vec::new(),
            pathing: false,
            found: HashMap::new(),
            started_at: Instant::now(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_found_record(mut self, found_record: FoundRecord) -> Self {
        self.found_record = found_record;
        self
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Seed the puzzle was generated from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn candidate(&self) -> &[WordPathPosition] {
        &self.candidate
    }

    pub fn is_pathing(&self) -> bool {
        self.pathing
    }

    /// The grid cell at `(x, y)` as a path position, if it is on the grid.
    pub fn position_at(&self, x: usize, y: usize) -> Option<WordPathPosition> {
        let grid = self.puzzle.grid();
        if x >= grid.width() || y >= grid.height() {
            return None;
        }
        Some(WordPathPosition {
            x,
            y,
            ch: grid.get(x, y),
            angle: 0.0,
        })
    }

    /// Begin tracing a new path at `pos`, dropping any path in progress.
    pub fn start_path(&mut self, pos: WordPathPosition) {
        self.pathing = true;
        self.candidate.clear();
        self.candidate.push(pos);
    }

    /// Offer the next cell under the pointer.
    pub fn update_path(&mut self, pos: WordPathPosition) -> PathUpdate {
        if !self.pathing {
            return PathUpdate::Ignored;
        }

        let len = self.candidate.len();
        if len > 1 && self.candidate[len - 2].same_cell(&pos) {
            self.candidate.pop();
            return PathUpdate::Retracted;
        }
        if let Some(last) = self.candidate.last() {
            if !last.is_adjacent(&pos) {
                return PathUpdate::Ignored;
            }
        }
        if self.candidate.iter().any(|p| p.same_cell(&pos)) {
            return PathUpdate::Ignored;
        }

        self.candidate.push(pos);
        PathUpdate::Extended
    }

    /// Abandon the path in progress without checking it.
    pub fn cancel_path(&mut self) {
        self.pathing = false;
        self.candidate.clear();
    }

    /// Release the path and check it against the hidden words.
    pub fn close_path(&mut self) -> CloseOutcome {
        self.pathing = false;
        let candidate = std::mem::take(&mut self.candidate);
        if candidate.is_empty() {
            return CloseOutcome::NoMatch;
        }

        let Some(index) = find_match(self.policy, self.puzzle.paths(), &candidate) else {
            return CloseOutcome::NoMatch;
        };
        let Some(word) = self.puzzle.word_at(index).map(str::to_string) else {
            return CloseOutcome::NoMatch;
        };
        if self.found.contains_key(&word) {
            return CloseOutcome::AlreadyFound { index };
        }

        let record = match self.found_record {
            FoundRecord::Solution => self.puzzle.paths()[index].clone(),
            FoundRecord::Candidate => candidate,
        };
        self.found.insert(word.clone(), record);
        CloseOutcome::Found { index, word }
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains_key(word)
    }

    /// Path stored for a found word, for highlighting
    pub fn found_path(&self, word: &str) -> Option<&WordPath> {
        self.found.get(word)
    }

    /// True once every word has been found
    pub fn is_won(&self) -> bool {
        !self.puzzle.is_empty() && self.found.len() == self.puzzle.len()
    }

    /// Format progress as "n / m found"
    pub fn progress(&self) -> String {
        format!("{} / {} found", self.found_count(), self.puzzle.len())
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}
