//! Building [`Board`]s from sparse placements and dense rows.

use std::collections::HashSet;
use std::num::NonZero;
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cell::Cell;
use crate::error::Error;
use crate::location::{Dimension, Location};

/// The most cells a [`Board`] may hold. Larger boards are refused with [`Error::BoardTooLarge`].
pub const MAX_CELLS: usize = 1 << 20;

/// Reasons a [`BoardBuilder`] may become invalid while building.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// A letter was placed outside the dimensions given to the builder.
    #[error("placement at {location} is outside the board")]
    OutOfBounds {
        /// Where the placement was attempted.
        location: Location,
    },
    /// Two letters were placed on the same location.
    #[error("more than one letter placed at {location}")]
    DuplicatePlacement {
        /// The contested location.
        location: Location,
    },
    /// The letter field holds more than one letter.
    #[error("letter {letter:?} at {location} is not a single letter")]
    MalformedLetter {
        /// Where the placement was attempted.
        location: Location,
        /// The field as received.
        letter: String,
    },
}

/// One tile in a submission: `letter` placed at column `x`, row `y`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// The letter as typed by the player.
    ///
    /// A single letter is lowercased and an empty or non-alphabetic field leaves the cell empty.
    /// A field of several letters, such as `"qu"`, is a [`MalformedLetter`](BuilderInvalidReason::MalformedLetter).
    pub letter: String,
}

impl Position {
    /// Shorthand for a position with a one-character letter.
    pub fn new(x: usize, y: usize, letter: char) -> Self {
        Self { x, y, letter: letter.to_string() }
    }

    /// Where this tile goes.
    pub fn location(&self) -> Location {
        Location(self.x, self.y)
    }
}

/// Places letters on a fixed-size board one at a time.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// A placement which cannot be honoured makes the builder invalid; once invalid, further placements do nothing
/// and [`build`](Self::build) reports the first reason.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    placed: HashSet<Location>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    ///
    /// Fails with [`Error::BoardTooLarge`] if the board would hold more than [`MAX_CELLS`] cells.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Result<Self, Error> {
        check_area(dims.0.get(), dims.1.get())?;

        Ok(Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            placed: Default::default(),
            invalid_reasons: Default::default(),
        })
    }

    /// Place the letter field `letter` at `location`.
    ///
    /// Non-alphabetic fields still occupy the location, so placing anything twice at one location is a
    /// [`DuplicatePlacement`](BuilderInvalidReason::DuplicatePlacement).
    /// May also cause a [`OutOfBounds`](BuilderInvalidReason::OutOfBounds) or
    /// [`MalformedLetter`](BuilderInvalidReason::MalformedLetter) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place(&mut self, location: Location, letter: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::OutOfBounds { location });
            return self;
        }

        if !self.placed.insert(location) {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicatePlacement { location });
            return self;
        }

        match Cell::parse_letter(letter) {
            Some(cell) => self.cells.index_mut(location.as_index()).assign_elem(cell),
            None => self.invalid_reasons.push(BuilderInvalidReason::MalformedLetter {
                location,
                letter: letter.to_string(),
            }),
        }

        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some` of every reason it is not otherwise.
    pub fn is_valid(&self) -> Option<&[BuilderInvalidReason]> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    pub fn build(&self) -> Result<Board, Error> {
        if let Some(reason) = self.invalid_reasons.first() {
            return Err(reason.clone().into());
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
        })
    }
}

impl Board {
    /// Build the smallest board reaching every position: `max(y) + 1` rows by `max(x) + 1` columns.
    ///
    /// Fails with [`Error::EmptyInput`] if `positions` is empty, with [`Error::BoardTooLarge`] if that board would
    /// exceed [`MAX_CELLS`], and with [`Error::InvalidPlacement`] if two positions share a location or a letter
    /// field holds more than one letter.
    pub fn from_positions(positions: &[Position]) -> Result<Self, Error> {
        // saturates at usize::MAX, which the area check always refuses
        let width = positions.iter().map(|p| p.x).max().ok_or(Error::EmptyInput)?.saturating_add(1);
        let height = positions.iter().map(|p| p.y).max().ok_or(Error::EmptyInput)?.saturating_add(1);

        let mut builder = BoardBuilder::with_dims((dimension(width)?, dimension(height)?))?;
        for position in positions {
            builder.place(position.location(), &position.letter);
        }
        builder.build()
    }

    /// Build a board from one string per row, one character per cell.
    ///
    /// Letters are lowercased; any other character leaves its cell empty.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, Error> {
        let rows = rows.iter().map(|row| row.as_ref().chars().map(Cell::from).collect_vec()).collect_vec();
        Self::from_dense(rows)
    }

    /// Build a board from a list of rows of cell fields.
    ///
    /// Each field is read like a [`Position`] letter.
    pub fn from_cells<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, Error> {
        let mut dense = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (x, field) in row.iter().enumerate() {
                let field = field.as_ref();
                cells.push(Cell::parse_letter(field).ok_or_else(|| BuilderInvalidReason::MalformedLetter {
                    location: Location(x, y),
                    letter: field.to_string(),
                })?);
            }
            dense.push(cells);
        }
        Self::from_dense(dense)
    }

    fn from_dense(rows: Vec<Vec<Cell>>) -> Result<Self, Error> {
        let height = dimension(rows.len())?;
        let width = dimension(rows[0].len())?;

        if let Some((row, cells)) = rows.iter().find_position(|cells| cells.len() != width.get()) {
            return Err(Error::RaggedRows { row, expected: width.get(), actual: cells.len() });
        }
        check_area(width.get(), height.get())?;

        let mut board = Self::blank((width, height));
        for (index, cell) in board.cells.indexed_iter_mut() {
            cell.assign_elem(rows[index.0][index.1]);
        }
        Ok(board)
    }
}

fn dimension(len: usize) -> Result<Dimension, Error> {
    NonZero::new(len).ok_or(Error::EmptyInput)
}

fn check_area(width: usize, height: usize) -> Result<(), Error> {
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(Error::BoardTooLarge { width, height }),
    }
}
