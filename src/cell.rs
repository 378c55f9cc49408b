use std::fmt::{Display, Formatter};

/// The content of one square on a [`Board`](crate::Board).
///
/// Cells hold at most one lowercase letter. Converting from a [`char`] never fails:
/// alphabetic input is lowercased and anything else becomes [`Cell::Empty`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A placed tile.
    Letter(char),
    /// No tile here.
    #[default]
    Empty,
}

impl Cell {
    /// The letter on this cell, if any.
    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(letter) => Some(*letter),
            Cell::Empty => None,
        }
    }

    /// Whether a tile has been placed here.
    pub fn is_letter(&self) -> bool {
        matches!(self, Cell::Letter(_))
    }

    /// Whether this cell is [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        !self.is_letter()
    }

    /// Parse a letter field as sent by a client.
    ///
    /// Returns `None` if `raw` holds more than one alphabetic character; such a field has no single-cell meaning.
    /// Every other input normalizes like a [`char`]: a lone letter is lowercased, non-alphabetic or empty input is [`Cell::Empty`].
    pub fn parse_letter(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Some(Cell::Empty),
            (Some(only), None) => Some(Cell::from(only)),
            // a multi-character field is non-alphabetic as a whole unless every character is a letter
            _ if raw.chars().all(char::is_alphabetic) => None,
            _ => Some(Cell::Empty),
        }
    }
}

impl From<char> for Cell {
    fn from(value: char) -> Self {
        if value.is_alphabetic() {
            // some uppercase letters lower to more than one char; keep the base letter
            Cell::Letter(value.to_lowercase().next().unwrap_or(value))
        } else {
            Cell::Empty
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter().unwrap_or('.'))
    }
}
