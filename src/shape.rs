use ndarray::Axis;
use strum::{Display, VariantArray};

use crate::location::Location;

/// A single step between orthogonally adjacent cells on a rectangular board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl SquareStep {
    /// Directions which, given the row-major ordering of the cell array, land on a higher indexed cell.
    ///
    /// Walking only these from every cell visits each adjacent pair exactly once.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    /// Attempt the step from `location` and return the resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps to a huge coordinate, which every bounds check rejects.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}

/// The direction a line of cells is read in.
///
/// [`Orientation::VARIANTS`] lists rows before columns, which is the order words are reported in.
#[derive(Copy, Clone, VariantArray, Display, Eq, PartialEq, Hash, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// Rows, read left to right.
    Across,
    /// Columns, read top to bottom.
    Down,
}

impl Orientation {
    /// The array axis iterated to obtain lines of this orientation.
    pub(crate) fn lanes_axis(&self) -> Axis {
        match self {
            // a row is a lane along the column axis
            Self::Across => Axis(1),
            Self::Down => Axis(0),
        }
    }
}

/// One of the two array axes, named for error reporting.
#[derive(Copy, Clone, Display, Eq, PartialEq, Hash, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum BoardAxis {
    /// Row indices, `y` in a [`Location`].
    Row,
    /// Column indices, `x` in a [`Location`].
    Column,
}
