//! Basic example of using the word search engine

use wordsearch_core::{CloseOutcome, Generator, GeneratorConfig, Session};

fn main() {
    let words = ["atom", "laser", "orbit", "quark", "comet", "fossil"];

    // Generate a puzzle
    println!("Generating a 10x10 science puzzle...\n");
    let seed = 2024;
    let mut generator = Generator::with_config_and_seed(GeneratorConfig::with_size(10, 10), seed);
    let Some(puzzle) = generator.build("science", &words) else {
        println!("Could not place every word with seed {}", seed);
        return;
    };

    println!("Generated puzzle:");
    println!("{}", puzzle.grid());
    println!("Words: {}\n", puzzle.words().join(", "));

    // Show where each word is hidden
    for (word, path) in puzzle.words().iter().zip(puzzle.paths()) {
        let cells: Vec<String> = path.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
        println!("{:>8}: {}", word, cells.join(" "));
    }

    // Trace the first word the way a player would
    println!("\n--- Tracing \"{}\" ---\n", puzzle.words()[0]);
    let solution = puzzle.paths()[0].clone();
    let mut session = Session::new(puzzle, seed);
    let mut cells = solution.iter();
    if let Some(first) = cells.next().and_then(|p| session.position_at(p.x, p.y)) {
        session.start_path(first);
    }
    for p in cells {
        if let Some(pos) = session.position_at(p.x, p.y) {
            session.update_path(pos);
        }
    }
    match session.close_path() {
        CloseOutcome::Found { word, .. } => println!("Found {}!", word),
        CloseOutcome::AlreadyFound { .. } => println!("Already found"),
        CloseOutcome::NoMatch => println!("No match"),
    }
    println!("{}", session.progress());
}
