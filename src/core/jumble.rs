//! Memory-recall exercise: the notes are cut into lines, shuffled and shown
//! as tiles; `reveal` gives the lines back in their original order.

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jumble {
    original: Vec<String>,
    tiles: Vec<String>,
}

/// Non-empty trimmed lines of `notes`, in order.
pub fn note_lines(notes: &str) -> Vec<String> {
    notes
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

impl Jumble {
    pub fn from_notes<R: Rng + ?Sized>(notes: &str, rng: &mut R) -> Self {
        let original = note_lines(notes);
        let mut tiles = original.clone();
        tiles.shuffle(rng);
        Self { original, tiles }
    }

    /// Lines in shuffled order.
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Lines in original order: the answer key.
    pub fn reveal(&self) -> &[String] {
        &self.original
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
