use crate::{GenerationError, Heading, LetterGrid, Pcg32, Puzzle, WordPath, WordPathPosition};
use log::{debug, trace, warn};

const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Trials per word before the whole puzzle is given up
    pub max_attempts: usize,
    /// Chance of turning after each placed letter
    pub turn_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 12,
            max_attempts: 250,
            turn_probability: 0.6,
        }
    }
}

impl GeneratorConfig {
    pub fn small() -> Self {
        Self {
            width: 8,
            height: 8,
            ..Self::default()
        }
    }

    pub fn large() -> Self {
        Self {
            width: 16,
            height: 16,
            max_attempts: 500,
            ..Self::default()
        }
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Why a single trial was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The path walked off the grid
    OutOfBounds,
    /// The path came back to a cell it already used
    SelfIntersection,
    /// A committed word holds a different letter here
    Collision,
}

/// Result of one step of a [`WordPlacer`]
#[derive(Debug, Clone, PartialEq)]
pub enum TrialOutcome {
    /// The word was committed to the grid along this path
    Placed(WordPath),
    /// This trial failed; the grid is untouched
    Rejected(Rejection),
    /// The attempt budget ran out
    Exhausted,
}

/// Final result of placing one word
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Placed(WordPath),
    Exhausted,
}

/// Places one word on a grid, one trial per step.
///
/// Iterating drives the trials; the iterator ends after yielding either
/// [`TrialOutcome::Placed`] or [`TrialOutcome::Exhausted`]. The grid is only
/// written when a trial succeeds, and then all at once.
pub struct WordPlacer<'a> {
    grid: &'a mut LetterGrid,
    rng: &'a mut Pcg32,
    word: &'a str,
    letters: Vec<char>,
    max_attempts: usize,
    turn_probability: f64,
    attempts: usize,
    done: bool,
}

impl<'a> WordPlacer<'a> {
    pub fn new(
        grid: &'a mut LetterGrid,
        rng: &'a mut Pcg32,
        config: &GeneratorConfig,
        word: &'a str,
    ) -> Self {
        Self {
            grid,
            rng,
            word,
            letters: word.chars().collect(),
            max_attempts: config.max_attempts,
            turn_probability: config.turn_probability,
            attempts: 0,
            done: false,
        }
    }

    /// Trials run so far
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Walk one randomized path without touching the grid.
    fn trial(&mut self) -> Result<WordPath, Rejection> {
        let mut x = self.rng.index(self.grid.width()) as isize;
        let mut y = self.rng.index(self.grid.height()) as isize;
        let mut heading = Heading::default();
        let mut path = WordPath::with_capacity(self.letters.len());

        debug!("Attempting to place {} starting at {},{}", self.word, x, y);

        for &letter in &self.letters {
            if !self.grid.contains(x, y) {
                return Err(Rejection::OutOfBounds);
            }
            let (cx, cy) = (x as usize, y as usize);

            if path.iter().any(|p| p.x == cx && p.y == cy) {
                return Err(Rejection::SelfIntersection);
            }

            if let Some(existing) = self.grid.get(cx, cy) {
                if !same_letter(existing, letter) {
                    return Err(Rejection::Collision);
                }
            }

            trace!("placed {} at {},{} from {}", letter, cx, cy, heading.octant());
            path.push(WordPathPosition::with_angle(cx, cy, letter, heading.angle()));

            if self.rng.number() < self.turn_probability {
                heading = heading.turn(self.rng.integer(5) as u8 + 2);
            }
            let (dx, dy) = heading.step();
            x += dx;
            y += dy;
        }

        Ok(path)
    }

    fn commit(&mut self, path: &WordPath) {
        for pos in path {
            if let Some(letter) = pos.ch {
                self.grid.set(pos.x, pos.y, uppercase(letter));
            }
        }
    }
}

impl Iterator for WordPlacer<'_> {
    type Item = TrialOutcome;

    fn next(&mut self) -> Option<TrialOutcome> {
        if self.done {
            return None;
        }
        if self.attempts >= self.max_attempts {
            self.done = true;
            debug!(
                "Failed to place {} in {} attempts",
                self.word, self.max_attempts
            );
            return Some(TrialOutcome::Exhausted);
        }

        self.attempts += 1;
        match self.trial() {
            Ok(path) => {
                self.commit(&path);
                self.done = true;
                debug!("Completed path in {} attempts", self.attempts);
                Some(TrialOutcome::Placed(path))
            }
            Err(rejection) => {
                trace!("Trial {} rejected: {:?}", self.attempts, rejection);
                Some(TrialOutcome::Rejected(rejection))
            }
        }
    }
}

/// Word search puzzle generator
pub struct Generator {
    config: GeneratorConfig,
    rng: Pcg32,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Pcg32::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: Pcg32::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Pcg32::with_seed(seed),
        }
    }

    pub fn with_config_and_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Pcg32::with_seed(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Reseed before a build so the puzzle can be reproduced later.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng.set_seed(seed);
    }

    /// Build a puzzle, or `None` if the words could not all be placed.
    pub fn build<S: AsRef<str>>(&mut self, topic: &str, words: &[S]) -> Option<Puzzle> {
        match self.try_build(topic, words) {
            Ok(puzzle) => Some(puzzle),
            Err(GenerationError::EmptyWordList) => None,
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Build a puzzle, reporting which step failed.
    pub fn try_build<S: AsRef<str>>(
        &mut self,
        topic: &str,
        words: &[S],
    ) -> Result<Puzzle, GenerationError> {
        let longest = words
            .iter()
            .map(|w| w.as_ref().chars().count())
            .max()
            .ok_or(GenerationError::EmptyWordList)?;

        let (width, height) = (self.config.width, self.config.height);
        if width == 0 || height == 0 {
            return Err(GenerationError::InvalidDimensions { width, height });
        }
        debug!(
            "Building {}x{} puzzle for {} words, longest {}",
            width,
            height,
            words.len(),
            longest
        );

        let mut grid = LetterGrid::new(width, height);
        let mut paths = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            match self.place_word(&mut grid, word) {
                Placement::Placed(path) => paths.push(path),
                Placement::Exhausted => {
                    return Err(GenerationError::PlacementExhausted {
                        word: word.to_string(),
                        attempts: self.config.max_attempts,
                    })
                }
            }
        }
        self.fill_blanks(&mut grid);

        let words = words.iter().map(|w| w.as_ref().to_string()).collect();
        Ok(Puzzle::new(topic.to_string(), words, grid, paths))
    }

    /// Start placing `word`; drive the returned placer to run trials.
    pub fn placer<'a>(&'a mut self, grid: &'a mut LetterGrid, word: &'a str) -> WordPlacer<'a> {
        WordPlacer::new(grid, &mut self.rng, &self.config, word)
    }

    /// Run trials until `word` is committed or the budget is spent.
    pub fn place_word(&mut self, grid: &mut LetterGrid, word: &str) -> Placement {
        for outcome in self.placer(grid, word) {
            match outcome {
                TrialOutcome::Placed(path) => return Placement::Placed(path),
                TrialOutcome::Exhausted => break,
                TrialOutcome::Rejected(_) => {}
            }
        }
        Placement::Exhausted
    }

    /// Give every empty cell a random uppercase letter.
    pub fn fill_blanks(&mut self, grid: &mut LetterGrid) {
        for (x, y) in grid.empty_cells() {
            let letter = ALPHABET[self.rng.index(ALPHABET.len())];
            grid.set(x, y, letter);
        }
    }
}

fn uppercase(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

fn same_letter(a: char, b: char) -> bool {
    a.to_uppercase().eq(b.to_uppercase())
}
