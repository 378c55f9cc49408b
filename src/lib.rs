#![warn(missing_docs)]

//! # `wordgrid`
//!
//! Validation and scoring for a daily letter-grid puzzle. Players place the day's tiles on an unbounded grid;
//! a placement stands when every word it spells is in the dictionary and every tile touches the rest.
//! Among standing placements, the one with the smallest bounding box wins.
//!
//! Begin by building a [`Board`], either from a sparse list of [`Position`]s as submitted by a client
//! ([`Board::from_positions`]), from dense rows ([`Board::from_rows`]), or with a [`BoardBuilder`].
//! A board answers three questions on its own:
//!
//! - [`Board::words`]: every maximal run of two or more letters along rows, then along columns;
//! - [`Board::components`]: the letters grouped by orthogonal adjacency;
//! - [`Board::bounding_box`]: the smallest rectangle covering every letter, whose area is the score.
//!
//! [`PuzzleValidator`] strings these together against a [`Dictionary`] and the day's entry in a [`Schedule`],
//! producing a [`Verdict`] which always carries the full diagnostics, whether or not the placement stands.
//!
//! Everything here is synchronous and allocation-bounded by the size of the board.
//! A [`Schedule`] and a [`Dictionary`] are immutable once loaded and may be shared between threads.

pub use board::{AxisRange, Board};
pub use bounds::BoundingBox;
pub use builder::{BoardBuilder, BuilderInvalidReason, Position, MAX_CELLS};
pub use cell::Cell;
pub use connectivity::Components;
pub use dictionary::{Dictionary, WordList};
pub use error::Error;
pub use location::Location;
pub use schedule::{shuffle_letters, DailyPuzzle, Schedule};
pub use shape::{BoardAxis, Orientation, SquareStep};
pub use validator::{PuzzleValidator, Stage, Submission, Verdict, DISCONNECTED_MESSAGE};

pub(crate) mod board;
pub(crate) mod bounds;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod connectivity;
pub(crate) mod dictionary;
pub(crate) mod error;
pub(crate) mod location;
pub(crate) mod schedule;
pub(crate) mod shape;
mod tests;
pub(crate) mod validator;
pub(crate) mod words;
