use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// One of the eight compass octants, `0..8`, each `45°` apart.
///
/// Octant 0 points along +x and octants advance towards +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Heading(u8);

/// Unit grid step for each octant, the rounded `(cos θ, sin θ)`.
const STEPS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Heading {
    pub fn new(octant: u8) -> Self {
        Self(octant % 8)
    }

    pub fn octant(&self) -> u8 {
        self.0
    }

    /// Angle in radians
    pub fn angle(&self) -> f64 {
        f64::from(self.0) * FRAC_PI_4
    }

    /// Rotate by `octants` steps of 45°.
    pub fn turn(&self, octants: u8) -> Self {
        Self::new(self.0.wrapping_add(octants % 8))
    }

    /// Offset to the neighbouring cell in this direction.
    pub fn step(&self) -> (isize, isize) {
        STEPS[self.0 as usize]
    }
}

/// A cell on a word path.
///
/// `angle` is the heading that led into this cell while the word was placed
/// (zero for the first letter). It is kept for rendering only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPathPosition {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "char", default)]
    pub ch: Option<char>,
    #[serde(default)]
    pub angle: f64,
}

impl WordPathPosition {
    pub fn new(x: usize, y: usize, ch: char) -> Self {
        Self {
            x,
            y,
            ch: Some(ch),
            angle: 0.0,
        }
    }

    pub fn with_angle(x: usize, y: usize, ch: char, angle: f64) -> Self {
        Self {
            x,
            y,
            ch: Some(ch),
            angle,
        }
    }

    /// Same coordinates, regardless of letter or angle
    pub fn same_cell(&self, other: &WordPathPosition) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Chebyshev distance of exactly one.
    pub fn is_adjacent(&self, other: &WordPathPosition) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy) == 1
    }
}

/// Ordered cells spelling one word, first letter first.
pub type WordPath = Vec<WordPathPosition>;

/// Uppercased letters along a path, or `None` if any position lacks a letter.
pub fn spelling(path: &[WordPathPosition]) -> Option<String> {
    path.iter()
        .map(|p| p.ch.map(|c| c.to_uppercase().collect::<String>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_steps_match_rounded_trig() {
        for octant in 0..8u8 {
            let heading = Heading::new(octant);
            let angle = heading.angle();
            let expected = (angle.cos().round() as isize, angle.sin().round() as isize);
            assert_eq!(heading.step(), expected, "octant {}", octant);
        }
    }

    #[test]
    fn test_heading_turn_wraps() {
        assert_eq!(Heading::new(6).turn(3), Heading::new(1));
        assert_eq!(Heading::new(0).turn(8), Heading::new(0));
        assert_eq!(Heading::new(9).octant(), 1);
    }

    #[test]
    fn test_adjacency() {
        let a = WordPathPosition::new(2, 2, 'a');
        assert!(a.is_adjacent(&WordPathPosition::new(3, 3, 'b')));
        assert!(a.is_adjacent(&WordPathPosition::new(2, 1, 'b')));
        assert!(!a.is_adjacent(&WordPathPosition::new(2, 2, 'b')));
        assert!(!a.is_adjacent(&WordPathPosition::new(4, 2, 'b')));
    }

    #[test]
    fn test_spelling() {
        let path = vec![
            WordPathPosition::new(0, 0, 'c'),
            WordPathPosition::new(1, 0, 'A'),
            WordPathPosition::new(2, 0, 't'),
        ];
        assert_eq!(spelling(&path).as_deref(), Some("CAT"));

        let mut broken = path.clone();
        broken[1].ch = None;
        assert_eq!(spelling(&broken), None);
    }

    #[test]
    fn test_position_json_uses_char_field() {
        let pos = WordPathPosition::with_angle(1, 2, 'z', FRAC_PI_4);
        let json = serde_json::to_value(&pos).unwrap();
        assert_eq!(json["char"], "z");

        let missing: WordPathPosition = serde_json::from_str(r#"{"x":0,"y":1}"#).unwrap();
        assert_eq!(missing.ch, None);
        assert_eq!(missing.angle, 0.0);
    }
}
