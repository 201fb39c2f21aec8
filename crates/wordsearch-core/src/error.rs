use std::fmt;

/// Errors that can occur while building a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No words were supplied
    EmptyWordList,
    /// The grid has no cells to place words in
    InvalidDimensions { width: usize, height: usize },
    /// A word found no valid placement within the attempt budget
    PlacementExhausted { word: String, attempts: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "No words to place"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions {}x{}", width, height)
            }
            Self::PlacementExhausted { word, attempts } => {
                write!(f, "Failed to place word {} in {} attempts", word, attempts)
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Ways a puzzle record can violate its own invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleDefect {
    /// `words` and `paths` have different lengths
    PathCountMismatch { words: usize, paths: usize },
    /// A path's length differs from its word's length
    PathLength { word: String, expected: usize, actual: usize },
    /// A path leaves the grid
    OutOfBounds { word: String, x: usize, y: usize },
    /// Reading the grid along a path does not spell the word
    Misspelled { word: String, x: usize, y: usize },
    /// Two consecutive path cells are not neighbours
    NotAdjacent { word: String, index: usize },
    /// A path visits the same cell twice
    RepeatedCell { word: String, x: usize, y: usize },
    /// A grid cell is empty or not an uppercase letter
    BadCell { x: usize, y: usize },
}

impl fmt::Display for PuzzleDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathCountMismatch { words, paths } => {
                write!(f, "{} words but {} paths", words, paths)
            }
            Self::PathLength {
                word,
                expected,
                actual,
            } => write!(
                f,
                "Path for {} has {} cells, expected {}",
                word, actual, expected
            ),
            Self::OutOfBounds { word, x, y } => {
                write!(f, "Path for {} leaves the grid at ({}, {})", word, x, y)
            }
            Self::Misspelled { word, x, y } => {
                write!(f, "Grid does not spell {} at ({}, {})", word, x, y)
            }
            Self::NotAdjacent { word, index } => {
                write!(f, "Path for {} jumps after cell {}", word, index)
            }
            Self::RepeatedCell { word, x, y } => {
                write!(f, "Path for {} revisits ({}, {})", word, x, y)
            }
            Self::BadCell { x, y } => write!(f, "Cell ({}, {}) is not an uppercase letter", x, y),
        }
    }
}

impl std::error::Error for PuzzleDefect {}
