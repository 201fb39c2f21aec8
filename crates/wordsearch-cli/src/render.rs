use std::fmt;
use wordsearch_core::{Puzzle, WordPath};

/// Plain text view of a puzzle: title, grid, then the word list.
///
/// With `reveal`, letters that belong to a hidden word are shown and every
/// other cell is blanked out.
pub struct TextView<'a> {
    pub puzzle: &'a Puzzle,
    pub seed: u64,
    pub reveal: bool,
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.puzzle.grid();
        writeln!(
            f,
            "{} ({}x{}, seed {})",
            self.puzzle.topic(),
            grid.width(),
            grid.height(),
            self.seed
        )?;
        writeln!(f)?;

        for (y, row) in grid.rows().enumerate() {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| {
                    let hidden = self.reveal && !on_any_path(self.puzzle.paths(), x, y);
                    match cell {
                        Some(c) if !hidden => c.to_string(),
                        _ => ".".to_string(),
                    }
                })
                .collect();
            writeln!(f, "  {}", line.join(" "))?;
        }

        writeln!(f)?;
        for word in self.puzzle.words() {
            writeln!(f, "  {}", word.to_uppercase())?;
        }
        Ok(())
    }
}

pub fn render_text(puzzle: &Puzzle, seed: u64, reveal: bool) -> String {
    TextView {
        puzzle,
        seed,
        reveal,
    }
    .to_string()
}

fn on_any_path(paths: &[WordPath], x: usize, y: usize) -> bool {
    paths
        .iter()
        .any(|path| path.iter().any(|p| p.x == x && p.y == y))
}
