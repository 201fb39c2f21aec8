mod render;
mod words;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use wordsearch_core::{
    find_match, Generator, GeneratorConfig, MatchPolicy, Puzzle, PuzzleDefect, WordPath,
    WordPathPosition,
};

/// Generate and check word search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle from a word list
    Generate(GenerateArgs),
    /// Check a traced path against a saved puzzle
    Check(CheckArgs),
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Words to hide (read from --words-file or $WORDSEARCH_WORDS if empty)
    words: Vec<String>,

    /// File with one word per line
    #[arg(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// Label stored with the puzzle
    #[arg(short, long, default_value = "words")]
    topic: String,

    /// Grid width
    #[arg(long, default_value_t = 12)]
    width: usize,

    /// Grid height
    #[arg(long, default_value_t = 12)]
    height: usize,

    /// Seed for a reproducible puzzle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Trials per word before giving up on a seed
    #[arg(long, default_value_t = 250)]
    max_attempts: usize,

    /// New seeds to try after a failed build
    #[arg(short, long, default_value_t = 10)]
    retries: usize,

    /// Output format
    #[arg(value_enum, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show only the letters of hidden words (text format)
    #[arg(long, default_value_t = false)]
    reveal: bool,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Puzzle file written by `generate --format json`
    #[arg(short, long)]
    puzzle: PathBuf,

    /// Traced cells as "x,y x,y ..."
    #[arg(long, allow_hyphen_values = true)]
    path: String,

    /// Require the exact generated placement
    #[arg(long, default_value_t = false)]
    exact: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Saved puzzle: the puzzle plus the seed that reproduces it
#[derive(Debug, Serialize, Deserialize)]
struct PuzzleDocument {
    seed: u64,
    puzzle: Puzzle,
}

/// Errors reported to the user
#[derive(Debug)]
enum CliError {
    Io(PathBuf, std::io::Error),
    Json(serde_json::Error),
    NoWords,
    BadPath(String),
    BadPuzzle(PuzzleDefect),
    GenerationFailed { tries: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "{}: {}", path.display(), e),
            Self::Json(e) => write!(f, "Invalid puzzle file: {}", e),
            Self::NoWords => write!(f, "No words given"),
            Self::BadPath(cell) => write!(f, "Invalid cell {:?}, expected x,y", cell),
            Self::BadPuzzle(defect) => write!(f, "Corrupt puzzle: {}", defect),
            Self::GenerationFailed { tries } => {
                write!(f, "Could not place every word after {} seeds", tries)
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match args.command {
        Command::Generate(generate_args) => generate(generate_args),
        Command::Check(check_args) => check(check_args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn load_words(args: &GenerateArgs) -> Result<Vec<String>, CliError> {
    if !args.words.is_empty() {
        return Ok(words::normalize(&args.words));
    }
    let path = args
        .words_file
        .clone()
        .or_else(|| std::env::var_os(words::WORDS_ENV).map(PathBuf::from))
        .ok_or(CliError::NoWords)?;
    words::read_word_file(&path).map_err(|e| CliError::Io(path, e))
}

/// Build with `seed`, then with fresh seeds until one succeeds or retries run out.
///
/// Follow-up seeds are drawn from `seed`, so a given first seed always leads
/// to the same sequence of attempts.
fn build_with_retries(
    config: GeneratorConfig,
    topic: &str,
    words: &[String],
    seed: u64,
    retries: usize,
) -> Result<PuzzleDocument, CliError> {
    let mut seeds = StdRng::seed_from_u64(seed);
    let mut generator = Generator::with_config(config);
    let mut current = seed;

    for attempt in 0..=retries {
        generator.set_seed(current);
        debug!("Build attempt {} with seed {}", attempt + 1, current);
        if let Some(puzzle) = generator.build(topic, words) {
            info!("Built puzzle with seed {}", current);
            return Ok(PuzzleDocument {
                seed: current,
                puzzle,
            });
        }
        warn!("Seed {} failed", current);
        current = seeds.gen();
    }
    Err(CliError::GenerationFailed { tries: retries + 1 })
}

fn generate(args: GenerateArgs) -> Result<ExitCode, CliError> {
    let words = load_words(&args)?;
    if words.is_empty() {
        return Err(CliError::NoWords);
    }

    let config = GeneratorConfig {
        width: args.width,
        height: args.height,
        max_attempts: args.max_attempts,
        ..GeneratorConfig::default()
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let doc = build_with_retries(config, &args.topic, &words, seed, args.retries)?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", render::render_text(&doc.puzzle, doc.seed, args.reveal))
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse "x,y x,y" (spaces or semicolons between cells).
fn parse_cells(text: &str) -> Result<Vec<(usize, usize)>, CliError> {
    text.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|cell| !cell.is_empty())
        .map(|cell| -> Result<(usize, usize), CliError> {
            let (x, y) = cell
                .split_once(',')
                .ok_or_else(|| CliError::BadPath(cell.to_string()))?;
            let bad = |_: std::num::ParseIntError| CliError::BadPath(cell.to_string());
            Ok((x.trim().parse().map_err(bad)?, y.trim().parse().map_err(bad)?))
        })
        .collect()
}

/// Turn cells into a candidate path, reading letters from the grid.
fn candidate_path(puzzle: &Puzzle, cells: &[(usize, usize)]) -> Result<WordPath, CliError> {
    let grid = puzzle.grid();
    cells
        .iter()
        .map(|&(x, y)| {
            if x >= grid.width() || y >= grid.height() {
                return Err(CliError::BadPath(format!("{},{}", x, y)));
            }
            Ok(WordPathPosition {
                x,
                y,
                ch: grid.get(x, y),
                angle: 0.0,
            })
        })
        .collect()
}

fn check(args: CheckArgs) -> Result<ExitCode, CliError> {
    let text =
        fs::read_to_string(&args.puzzle).map_err(|e| CliError::Io(args.puzzle.clone(), e))?;
    let doc: PuzzleDocument = serde_json::from_str(&text)?;
    doc.puzzle.verify().map_err(CliError::BadPuzzle)?;

    let cells = parse_cells(&args.path)?;
    let candidate = candidate_path(&doc.puzzle, &cells)?;
    let policy = if args.exact {
        MatchPolicy::ExactPosition
    } else {
        MatchPolicy::CharacterSequence
    };

    match find_match(policy, doc.puzzle.paths(), &candidate) {
        Some(index) => {
            println!("found {}", doc.puzzle.words()[index]);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("no match");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_cells() {
        assert!(parse_cells("0,0 2, 1").is_err());
        assert_eq!(
            parse_cells(" 0,0  1,1;2,1 ").unwrap(),
            vec![(0, 0), (1, 1), (2, 1)]
        );
        assert!(matches!(parse_cells("3"), Err(CliError::BadPath(_))));
        assert!(matches!(parse_cells("a,1"), Err(CliError::BadPath(_))));
    }

    #[test]
    fn test_retries_are_reproducible() {
        let config = GeneratorConfig::with_size(5, 5);
        let list = words(&["otter", "heron", "lynx"]);
        let a = build_with_retries(config.clone(), "t", &list, 77, 20);
        let b = build_with_retries(config, "t", &list, 77, 20);
        match (a, b) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.seed, b.seed);
                assert_eq!(a.puzzle, b.puzzle);
            }
            (Err(_), Err(_)) => {}
            _ => panic!("same first seed must give the same result"),
        }
    }

    #[test]
    fn test_impossible_words_fail_after_retries() {
        let config = GeneratorConfig::with_size(2, 2);
        let list = words(&["giraffe"]);
        let result = build_with_retries(config, "t", &list, 1, 3);
        assert!(matches!(result, Err(CliError::GenerationFailed { tries: 4 })));
    }

    #[test]
    fn test_check_flow_on_saved_document() {
        let config = GeneratorConfig::with_size(8, 8);
        let doc = build_with_retries(config, "pets", &words(&["cat", "dog"]), 5, 10).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let loaded: PuzzleDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.seed, doc.seed);
        assert_eq!(loaded.puzzle.verify(), Ok(()));

        let cells: Vec<(usize, usize)> = loaded.puzzle.paths()[1]
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        let candidate = candidate_path(&loaded.puzzle, &cells).unwrap();
        assert_eq!(
            find_match(MatchPolicy::ExactPosition, loaded.puzzle.paths(), &candidate),
            Some(1)
        );
        assert!(candidate_path(&loaded.puzzle, &[(8, 0)]).is_err());
    }

    #[test]
    fn test_accented_words_build_a_valid_puzzle() {
        let list = words::normalize(["Café", "Straße", "Piñata"]);
        let doc = build_with_retries(GeneratorConfig::default(), "food", &list, 3, 10).unwrap();
        assert_eq!(doc.puzzle.verify(), Ok(()));
    }

    #[test]
    fn test_truncated_grid_is_rejected_on_load() {
        let text = r#"{"seed":1,"puzzle":{"topic":"t","words":[],
            "grid":{"width":3,"height":3,"cells":["A"]},"paths":[]}}"#;
        let result: Result<PuzzleDocument, CliError> =
            serde_json::from_str(text).map_err(CliError::from);
        assert!(matches!(result, Err(CliError::Json(_))));
    }
}
