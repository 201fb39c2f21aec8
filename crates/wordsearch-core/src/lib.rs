//! Word search engine.
//!
//! Builds letter grids with words hidden along bending paths and checks
//! player-traced paths against them.
//!
//! ```
//! use wordsearch_core::{find_match, Generator, MatchPolicy};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.build("animals", &["otter", "heron"]).unwrap();
//!
//! let traced = puzzle.paths()[1].clone();
//! assert_eq!(find_match(MatchPolicy::default(), puzzle.paths(), &traced), Some(1));
//! ```
//!
//! The same seed, word list and grid size always produce the same puzzle.

mod error;
mod generator;
mod grid;
mod matcher;
mod path;
mod puzzle;
mod rng;
mod session;


pub use error::{GenerationError, PuzzleDefect};
pub use generator::{
    Generator, GeneratorConfig, Placement, Rejection, TrialOutcome, WordPlacer,
};
pub use grid::LetterGrid;
pub use matcher::{find_match, matches, MatchPolicy};
pub use path::{spelling, Heading, WordPath, WordPathPosition};
pub use puzzle::Puzzle;
pub use rng::Pcg32;
pub use session::{CloseOutcome, FoundRecord, PathUpdate, Session};
