use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-size letter buffer, stored row-major.
///
/// A cell holds `None` until a word or the blank filler claims it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct LetterGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    /// Allocate a `width` x `height` grid with every cell empty.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a signed coordinate lies inside the grid.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get the letter at `(x, y)`.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells[self.index(x, y)]
    }

    /// Set the letter at `(x, y)`.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, letter: char) {
        let idx = self.index(x, y);
        self.cells[idx] = Some(letter);
    }

    /// Number of cells not yet holding a letter
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True once every cell holds a letter
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // chunks(0) panics, and a zero-width grid has no rows anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Coordinates of every empty cell, row-major.
    pub(crate) fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(self.empty_count());
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y).is_none() {
                    empty.push((x, y));
                }
            }
        }
        empty
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

/// Unchecked serialized form of a [`LetterGrid`]
#[derive(Deserialize)]
struct GridData {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl TryFrom<GridData> for LetterGrid {
    type Error = String;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let expected = data.width.checked_mul(data.height);
        if expected != Some(data.cells.len()) {
            return Err(format!(
                "{}x{} grid needs {} cells, found {}",
                data.width,
                data.height,
                data.width.saturating_mul(data.height),
                data.cells.len()
            ));
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            cells: data.cells,
        })
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map(String::from).unwrap_or_else(|| ".".to_string()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = LetterGrid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.empty_count(), 12);
        assert!(!grid.is_complete());
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = LetterGrid::new(3, 2);
        grid.set(2, 1, 'Q');
        assert_eq!(grid.get(2, 1), Some('Q'));
        assert_eq!(grid.get(1, 1), None);
        assert_eq!(grid.empty_count(), 5);
    }

    #[test]
    fn test_contains() {
        let grid = LetterGrid::new(3, 2);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(2, 1));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(3, 0));
        assert!(!grid.contains(0, 2));
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn test_out_of_bounds_read_panics() {
        LetterGrid::new(3, 3).get(3, 0);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn test_out_of_bounds_write_panics() {
        LetterGrid::new(3, 3).set(0, 5, 'A');
    }

    #[test]
    fn test_display() {
        let mut grid = LetterGrid::new(2, 2);
        grid.set(0, 0, 'A');
        grid.set(1, 1, 'B');
        assert_eq!(grid.to_string(), "A .\n. B\n");
    }

    #[test]
    fn test_deserialize_checks_cell_count() {
        let short = r#"{"width":3,"height":3,"cells":["A"]}"#;
        let err = serde_json::from_str::<LetterGrid>(short).unwrap_err();
        assert!(err.to_string().contains("needs 9 cells, found 1"));

        let mut grid = LetterGrid::new(2, 1);
        grid.set(1, 0, 'K');
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<LetterGrid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut grid = LetterGrid::new(2, 2);
        grid.set(1, 0, 'X');
        assert_eq!(grid.empty_cells(), vec![(0, 0), (0, 1), (1, 1)]);
    }
}
