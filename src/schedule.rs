use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// The puzzle of one day: the letter bank handed to players and the best known score.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DailyPuzzle {
    /// Every tile available, uppercase, in a fixed order.
    pub letters: String,
    /// Smallest bounding-box area reached for this bank. Reported back to players as `lowest_score`.
    pub best_score: u32,
}

/// The immutable date → puzzle table, loaded once and shared between validations.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, DailyPuzzle>,
}

// (year, month, day, letters, best score)
const BUILTIN_DAYS: &[(i32, u32, u32, &str, u32)] = &[
    (2023, 1, 6, "MOLTEDAAVOPBOT", 20),
    (2023, 1, 7, "MOLTEDAAVOPBOT", 20),
    (2023, 1, 8, "BARNAREALIARLADY", 16),
    (2023, 1, 9, "SLAMTILEEATSPROS", 16),
];

impl Schedule {
    /// The days shipped with the game.
    pub fn builtin() -> Self {
        BUILTIN_DAYS.iter()
            .filter_map(|(year, month, day, letters, best_score)| {
                NaiveDate::from_ymd_opt(*year, *month, *day).map(|date| {
                    (date, DailyPuzzle { letters: letters.to_string(), best_score: *best_score })
                })
            })
            .collect()
    }

    /// Parse a schedule of the form `{"2023-01-06": {"letters": "...", "best_score": 20}, ...}`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let schedule: Self = serde_json::from_str(json)?;
        debug!(days = schedule.days.len(), "loaded schedule");
        Ok(schedule)
    }

    /// The puzzle scheduled on `date`.
    pub fn puzzle_for(&self, date: NaiveDate) -> Result<&DailyPuzzle, Error> {
        self.days.get(&date).ok_or(Error::NoPuzzleForDate(date))
    }

    /// The letter bank of `date`, shuffled by `rng` for display.
    pub fn daily_letters<R: Rng + ?Sized>(&self, date: NaiveDate, rng: &mut R) -> Result<String, Error> {
        Ok(shuffle_letters(&self.puzzle_for(date)?.letters, rng))
    }

    /// Every scheduled date, earliest first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Number of scheduled days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(NaiveDate, DailyPuzzle)> for Schedule {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, DailyPuzzle)>>(iter: T) -> Self {
        Self { days: iter.into_iter().collect() }
    }
}

/// A permutation of `letters` drawn from `rng`.
pub fn shuffle_letters<R: Rng + ?Sized>(letters: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = letters.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}
