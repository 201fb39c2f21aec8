use crate::{LetterGrid, PuzzleDefect, WordPath};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A finished word search.
///
/// `paths[i]` is the hidden placement of `words[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    topic: String,
    words: Vec<String>,
    grid: LetterGrid,
    paths: Vec<WordPath>,
}

impl Puzzle {
    pub(crate) fn new(
        topic: String,
        words: Vec<String>,
        grid: LetterGrid,
        paths: Vec<WordPath>,
    ) -> Self {
        Self {
            topic,
            words,
            grid,
            paths,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn paths(&self) -> &[WordPath] {
        &self.paths
    }

    /// Number of hidden words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// The solution path recorded for `word`
    pub fn path_for(&self, word: &str) -> Option<&WordPath> {
        let index = self.words.iter().position(|w| w == word)?;
        self.paths.get(index)
    }

    /// Check the structural invariants of a generated puzzle.
    ///
    /// Useful for puzzles loaded from outside, where nothing guarantees the
    /// paths still agree with the grid.
    pub fn verify(&self) -> Result<(), PuzzleDefect> {
        if self.words.len() != self.paths.len() {
            return Err(PuzzleDefect::PathCountMismatch {
                words: self.words.len(),
                paths: self.paths.len(),
            });
        }

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                match self.grid.get(x, y) {
                    Some(c) if c.is_ascii_uppercase() => {}
                    _ => return Err(PuzzleDefect::BadCell { x, y }),
                }
            }
        }

        for (word, path) in self.words.iter().zip(&self.paths) {
            self.verify_path(word, path)?;
        }
        Ok(())
    }

    fn verify_path(&self, word: &str, path: &WordPath) -> Result<(), PuzzleDefect> {
        let letters: Vec<char> = word.chars().collect();
        if letters.len() != path.len() {
            return Err(PuzzleDefect::PathLength {
                word: word.to_string(),
                expected: letters.len(),
                actual: path.len(),
            });
        }

        let mut visited = HashSet::new();
        for (i, (pos, letter)) in path.iter().zip(&letters).enumerate() {
            let (x, y) = (pos.x, pos.y);
            if x >= self.grid.width() || y >= self.grid.height() {
                return Err(PuzzleDefect::OutOfBounds {
                    word: word.to_string(),
                    x,
                    y,
                });
            }
            let spelled = self
                .grid
                .get(x, y)
                .is_some_and(|c| c.to_uppercase().eq(letter.to_uppercase()));
            if !spelled {
                return Err(PuzzleDefect::Misspelled {
                    word: word.to_string(),
                    x,
                    y,
                });
            }
            if !visited.insert((x, y)) {
                return Err(PuzzleDefect::RepeatedCell {
                    word: word.to_string(),
                    x,
                    y,
                });
            }
            if i > 0 && !path[i - 1].is_adjacent(pos) {
                return Err(PuzzleDefect::NotAdjacent {
                    word: word.to_string(),
                    index: i - 1,
                });
            }
        }
        Ok(())
    }
}
