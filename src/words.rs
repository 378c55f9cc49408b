use itertools::Itertools;
use strum::VariantArray;

use crate::board::Board;
use crate::shape::Orientation;

// stands in for empty cells while splitting lines; never a letter
const GAP: char = ' ';

impl Board {
    /// Every word on the board: each maximal run of at least two letters along a row or a column.
    ///
    /// Row words come first, top row to bottom row, then column words, left column to right column.
    /// Within a line, words are listed in reading order.
    pub fn words(&self) -> Vec<String> {
        Orientation::VARIANTS.iter()
            .flat_map(|orientation| self.words_along(*orientation))
            .collect_vec()
    }

    /// The words found on lines of a single orientation, in line order.
    pub fn words_along(&self, orientation: Orientation) -> Vec<String> {
        self.lines(orientation)
            .flat_map(|line| {
                let joined: String = line.iter().map(|cell| cell.letter().unwrap_or(GAP)).collect();
                joined.split(GAP)
                    .filter(|run| run.chars().count() > 1)
                    .map(str::to_string)
                    .collect_vec()
            })
            .collect_vec()
    }
}
