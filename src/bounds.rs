use std::ops::RangeInclusive;

use itertools::{Itertools, MinMaxResult};

use crate::board::Board;
use crate::error::Error;
use crate::shape::Orientation;

/// The smallest rectangle covering every letter on a [`Board`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoundingBox {
    /// First and last row holding a letter.
    pub rows: RangeInclusive<usize>,
    /// First and last column holding a letter.
    pub columns: RangeInclusive<usize>,
}

impl BoundingBox {
    /// Number of cells inside the box, letters or not. This is the score of a placement; lower is better.
    pub fn area(&self) -> usize {
        (self.rows.end() - self.rows.start() + 1) * (self.columns.end() - self.columns.start() + 1)
    }
}

impl Board {
    /// The first and last index of the lines of `orientation` holding at least one letter.
    fn occupied_extent(&self, orientation: Orientation) -> Option<RangeInclusive<usize>> {
        match self.lines(orientation).positions(|line| line.iter().any(|cell| cell.is_letter())).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(only) => Some(only..=only),
            MinMaxResult::MinMax(first, last) => Some(first..=last),
        }
    }

    /// The [`BoundingBox`] of every letter on this board.
    ///
    /// Fails with [`Error::EmptyGrid`] if the board holds no letters.
    pub fn bounding_box(&self) -> Result<BoundingBox, Error> {
        match (self.occupied_extent(Orientation::Across), self.occupied_extent(Orientation::Down)) {
            (Some(rows), Some(columns)) => Ok(BoundingBox { rows, columns }),
            // one is empty exactly when the other is
            _ => Err(Error::EmptyGrid),
        }
    }
}
