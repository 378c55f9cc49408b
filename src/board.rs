use std::fmt::{Display, Formatter};
use std::ops::{IndexMut, Range, RangeFrom, RangeFull, RangeTo};

use ndarray::{Array2, ArrayView1, AssignElem, Axis, Slice};

use crate::cell::Cell;
use crate::error::Error;
use crate::location::{Coord, Dimension, Location};
use crate::shape::{BoardAxis, Orientation};

/// A range of indices along one axis of a [`Board`], in the manner of a `start..stop` range stepping by `step`.
///
/// Every field is optional and resolved against the axis length when the range is used:
/// `start` defaults to 0, `stop` to the length of the axis and `step` to 1.
/// A range whose `start` is not below its `stop` addresses no cells, but its `stop` must still lie on the axis.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct AxisRange {
    /// First index addressed.
    pub start: Option<Coord>,
    /// Index one past the last index addressed.
    pub stop: Option<Coord>,
    /// Distance between addressed indices. Must not be 0.
    pub step: Option<usize>,
}

impl AxisRange {
    /// The whole axis.
    pub fn full() -> Self {
        Self::default()
    }

    /// Every `step`-th index of this range.
    pub fn step_by(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolve the defaults against an axis of length `len`.
    ///
    /// Fails if `step` is 0 or if `stop` reaches past the end of the axis.
    pub(crate) fn resolve(&self, axis: BoardAxis, len: usize) -> Result<Slice, Error> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::UnsupportedAccess(format!("{axis} range with a step of 0")));
        }

        let stop = self.stop.unwrap_or(len);
        if stop > len {
            return Err(Error::OutOfBounds { axis, index: len, len });
        }

        let start = self.start.unwrap_or(0);
        if start >= stop {
            return Ok(Slice::new(0, Some(0), 1));
        }

        Ok(Slice::new(start as isize, Some(stop as isize), step as isize))
    }
}

impl From<RangeFull> for AxisRange {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<Range<Coord>> for AxisRange {
    fn from(value: Range<Coord>) -> Self {
        Self { start: Some(value.start), stop: Some(value.end), step: None }
    }
}

impl From<RangeFrom<Coord>> for AxisRange {
    fn from(value: RangeFrom<Coord>) -> Self {
        Self { start: Some(value.start), ..Self::default() }
    }
}

impl From<RangeTo<Coord>> for AxisRange {
    fn from(value: RangeTo<Coord>) -> Self {
        Self { stop: Some(value.end), ..Self::default() }
    }
}

/// A rectangular board of letter [`Cell`]s.
///
/// [`Board`]s are built with [`BoardBuilder`](crate::builder::BoardBuilder) or one of
/// [`Board::from_positions`], [`Board::from_rows`] and [`Board::from_cells`].
/// Every access is bounds-checked; rows and columns are addressed with an [`AxisRange`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// A board of the given `(width, height)` with every cell empty.
    pub(crate) fn blank(dims: (Dimension, Dimension)) -> Self {
        Self {
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), Cell::Empty),
            dims,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    fn check(&self, axis: BoardAxis, index: Coord) -> Result<(), Error> {
        let len = match axis {
            BoardAxis::Row => self.height(),
            BoardAxis::Column => self.width(),
        };
        if index < len {
            Ok(())
        } else {
            Err(Error::OutOfBounds { axis, index, len })
        }
    }

    /// The cell at `location`.
    pub fn cell(&self, location: Location) -> Result<Cell, Error> {
        self.check(BoardAxis::Row, location.1)?;
        self.check(BoardAxis::Column, location.0)?;
        Ok(self.cells[location.as_index()])
    }

    /// Place `letter` at `location`, normalizing it first; a non-alphabetic `letter` clears the cell.
    pub fn set_cell(&mut self, location: Location, letter: char) -> Result<(), Error> {
        self.check(BoardAxis::Row, location.1)?;
        self.check(BoardAxis::Column, location.0)?;
        self.cells.index_mut(location.as_index()).assign_elem(Cell::from(letter));
        Ok(())
    }

    /// The cells of `row` addressed by `columns`, left to right.
    pub fn row(&self, row: Coord, columns: impl Into<AxisRange>) -> Result<Vec<Cell>, Error> {
        self.check(BoardAxis::Row, row)?;
        let slice = columns.into().resolve(BoardAxis::Column, self.width())?;
        Ok(self.cells.row(row).slice_axis(Axis(0), slice).to_vec())
    }

    /// The cells of `column` addressed by `rows`, top to bottom.
    pub fn column(&self, column: Coord, rows: impl Into<AxisRange>) -> Result<Vec<Cell>, Error> {
        self.check(BoardAxis::Column, column)?;
        let slice = rows.into().resolve(BoardAxis::Row, self.height())?;
        Ok(self.cells.column(column).slice_axis(Axis(0), slice).to_vec())
    }

    /// Write `letters` into the cells of `row` addressed by `columns`, one character per cell.
    ///
    /// `letters` must hold exactly as many characters as there are addressed cells.
    pub fn set_row(&mut self, row: Coord, columns: impl Into<AxisRange>, letters: &str) -> Result<(), Error> {
        self.check(BoardAxis::Row, row)?;
        let slice = columns.into().resolve(BoardAxis::Column, self.width())?;
        let mut lane = self.cells.row_mut(row);
        Self::write_lane(lane.slice_axis_mut(Axis(0), slice), letters)
    }

    /// Write `letters` into the cells of `column` addressed by `rows`, one character per cell.
    ///
    /// `letters` must hold exactly as many characters as there are addressed cells.
    pub fn set_column(&mut self, column: Coord, rows: impl Into<AxisRange>, letters: &str) -> Result<(), Error> {
        self.check(BoardAxis::Column, column)?;
        let slice = rows.into().resolve(BoardAxis::Row, self.height())?;
        let mut lane = self.cells.column_mut(column);
        Self::write_lane(lane.slice_axis_mut(Axis(0), slice), letters)
    }

    fn write_lane(mut lane: ndarray::ArrayViewMut1<Cell>, letters: &str) -> Result<(), Error> {
        let actual = letters.chars().count();
        if actual != lane.len() {
            return Err(Error::LengthMismatch { expected: lane.len(), actual });
        }

        lane.iter_mut()
            .zip(letters.chars())
            .for_each(|(cell, letter)| cell.assign_elem(Cell::from(letter)));
        Ok(())
    }

    /// The sub-board addressed by `rows` and `columns`, as a list of rows.
    pub fn region(&self, rows: impl Into<AxisRange>, columns: impl Into<AxisRange>) -> Result<Vec<Vec<Cell>>, Error> {
        let row_slice = rows.into().resolve(BoardAxis::Row, self.height())?;
        let column_slice = columns.into().resolve(BoardAxis::Column, self.width())?;

        let mut view = self.cells.view();
        view.slice_axis_inplace(Axis(0), row_slice);
        view.slice_axis_inplace(Axis(1), column_slice);
        Ok(view.rows().into_iter().map(|row| row.to_vec()).collect())
    }

    /// Every full line of the given orientation, in index order.
    pub fn lines(&self, orientation: Orientation) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.lanes(orientation.lanes_axis()).into_iter()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(cell.letter().unwrap_or('.'));
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
