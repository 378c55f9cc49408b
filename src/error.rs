use chrono::NaiveDate;

use crate::builder::BuilderInvalidReason;
use crate::shape::BoardAxis;

/// Every hard failure this crate reports.
///
/// Failed validation (a word missing from the dictionary, letters in more than one group) is not an error;
/// it is carried by [`Verdict::error`](crate::Verdict::error).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No positions or rows were supplied, so the board has no dimensions.
    #[error("no letters were submitted")]
    EmptyInput,
    /// The requested board would hold more than [`MAX_CELLS`](crate::MAX_CELLS) cells.
    #[error("a {width} by {height} board is too large")]
    BoardTooLarge {
        /// Number of columns requested.
        width: usize,
        /// Number of rows requested.
        height: usize,
    },
    /// A row or column index lies outside the board.
    #[error("{axis} {index} is outside the board, which has {len} {axis}s")]
    OutOfBounds {
        /// Whether `index` is a row or a column.
        axis: BoardAxis,
        /// The offending index; for a range, the first index past the end of the axis.
        index: usize,
        /// Number of rows or columns on the board.
        len: usize,
    },
    /// A ranged write was given the wrong number of values.
    #[error("expected {expected} values for the addressed cells, got {actual}")]
    LengthMismatch {
        /// Number of addressed cells.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// An access that addresses no well-defined set of cells.
    #[error("unsupported access: {0}")]
    UnsupportedAccess(String),
    /// Dense input whose rows differ in length.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// The placement could not be turned into a board.
    #[error("invalid placement: {0}")]
    InvalidPlacement(#[from] BuilderInvalidReason),
    /// A bounding box was requested on a board without letters.
    #[error("the board has no letters, so it has no bounding box")]
    EmptyGrid,
    /// The schedule has no puzzle on this date.
    #[error("no puzzle is scheduled for {0}")]
    NoPuzzleForDate(NaiveDate),
    /// The schedule could not be parsed.
    #[error("malformed schedule: {0}")]
    MalformedSchedule(#[from] serde_json::Error),
    /// Reading a word list or schedule failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
