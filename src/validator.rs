use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info};

use crate::board::Board;
use crate::builder::Position;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::schedule::Schedule;

/// Message reported when some placed letters are not reachable from the others.
pub const DISCONNECTED_MESSAGE: &str = "All words must be connected.";

/// A player's placement, as sent by the client.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Every placed tile. Locations must be unique.
    pub positions: Vec<Position>,
}

/// The outcome of validating a [`Submission`].
///
/// Invalid placements still carry every diagnostic so the player can be shown why the placement failed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Why the placement was refused, or `None` if it stands.
    ///
    /// When letters are disconnected this is [`DISCONNECTED_MESSAGE`], even if some words are also invalid.
    pub error: Option<String>,
    /// Every word on the board, row words first.
    pub words: Vec<String>,
    /// Each word of `words` paired with whether the dictionary accepts it.
    pub word_check: Vec<(String, bool)>,
    /// Area of the bounding box of the placed letters.
    pub bounding_box_area: usize,
    /// Best known score for the day.
    pub lowest_score: u32,
}

impl Verdict {
    /// Whether the placement stands.
    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }

    /// The words the dictionary refused, in board order.
    pub fn rejected_words(&self) -> impl Iterator<Item = &str> {
        self.word_check.iter().filter(|(_, valid)| !valid).map(|(word, _)| word.as_str())
    }
}

/// Where a validation currently stands.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// The board has been built from the submission.
    Built,
    /// Words have been read off the board.
    WordsExtracted,
    /// Every word has been looked up.
    WordsChecked,
    /// Letters have been grouped.
    ConnectivityChecked,
    /// The bounding box has been measured.
    Scored,
    /// The verdict is assembled.
    Done,
}

/// Runs submissions through word checking, connectivity and scoring.
///
/// Holds only shared, read-only collaborators, so one validator can serve any number of submissions.
pub struct PuzzleValidator<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    schedule: &'a Schedule,
}

impl<'a, D: Dictionary + ?Sized> PuzzleValidator<'a, D> {
    /// A validator looking words up in `dictionary` and scores in `schedule`.
    pub fn new(dictionary: &'a D, schedule: &'a Schedule) -> Self {
        Self { dictionary, schedule }
    }

    /// Validate `submission` as played on `date`.
    ///
    /// Invalid words and disconnected letters do not fail validation; they are reported in [`Verdict::error`].
    /// Malformed submissions, an all-empty board and an unscheduled `date` are errors.
    pub fn validate(&self, submission: &Submission, date: NaiveDate) -> Result<Verdict, Error> {
        let board = Board::from_positions(&submission.positions)?;
        enter(Stage::Built);
        self.judge(&board, date)
    }

    /// Validate an already built `board` as played on `date`.
    pub fn judge(&self, board: &Board, date: NaiveDate) -> Result<Verdict, Error> {
        let mut error = None;

        let words = board.words();
        enter(Stage::WordsExtracted);

        let word_check = words.iter()
            .map(|word| (word.clone(), self.dictionary.is_valid_word(word)))
            .collect_vec();
        let rejected = word_check.iter().filter(|(_, valid)| !valid).map(|(word, _)| word).join(", ");
        if !rejected.is_empty() {
            error = Some(format!("The following words are not allowed: {}", rejected));
        }
        enter(Stage::WordsChecked);

        let components = board.components();
        if !components.is_connected() {
            debug!(sizes = ?components.sizes(), "letters are disconnected");
            // replaces any word error; only one message is ever reported
            error = Some(DISCONNECTED_MESSAGE.to_string());
        }
        enter(Stage::ConnectivityChecked);

        let bounding_box_area = board.bounding_box()?.area();
        enter(Stage::Scored);

        let lowest_score = self.schedule.puzzle_for(date)?.best_score;
        enter(Stage::Done);

        info!(%date, accepted = error.is_none(), area = bounding_box_area, "validated placement");
        Ok(Verdict {
            error,
            words,
            word_check,
            bounding_box_area,
            lowest_score,
        })
    }
}

fn enter(stage: Stage) {
    debug!(%stage, "validation stage reached");
}
