#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::builder::{BoardBuilder, BuilderInvalidReason, Position};
    use crate::{
        shuffle_letters, AxisRange, Board, BoardAxis, Cell, Dictionary, Error, Location, Orientation, PuzzleValidator,
        Schedule, Submission, WordList, DISCONNECTED_MESSAGE, MAX_CELLS,
    };

    fn first_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 6).unwrap()
    }

    fn spell(word: &str, start: Location, orientation: Orientation) -> Vec<Position> {
        word.chars()
            .enumerate()
            .map(|(i, letter)| match orientation {
                Orientation::Across => Position::new(start.0 + i, start.1, letter),
                Orientation::Down => Position::new(start.0, start.1 + i, letter),
            })
            .collect()
    }

    #[test]
    fn dense_rows_normalize() {
        let board = Board::from_rows(&["CaT", "d-g", "1ZZ"]).unwrap();

        assert_eq!(board.height(), 3);
        assert_eq!(board.width(), 3);
        assert_eq!(format!("{}", board), "cat
d.g
.zz
");
        assert_eq!(board.cell(Location(0, 0)).unwrap(), Cell::Letter('c'));
        assert_eq!(board.cell(Location(1, 1)).unwrap(), Cell::Empty);
        assert_eq!(board.cell(Location(2, 2)).unwrap(), Cell::Letter('z'));
    }

    #[test]
    fn dense_cells_normalize() {
        let board = Board::from_cells(&[vec!["D", "", "?"], vec!["o", "G", " "]]).unwrap();
        assert_eq!(format!("{}", board), "d..
og.
");

        assert!(matches!(
            Board::from_cells(&[vec!["do", "g"]]),
            Err(Error::InvalidPlacement(BuilderInvalidReason::MalformedLetter { location: Location(0, 0), .. }))
        ));
    }

    #[test]
    fn dense_rows_rejected() {
        let no_rows: [&str; 0] = [];
        assert!(matches!(Board::from_rows(&no_rows), Err(Error::EmptyInput)));
        assert!(matches!(Board::from_rows(&[""]), Err(Error::EmptyInput)));
        assert!(matches!(
            Board::from_rows(&["cat", "do"]),
            Err(Error::RaggedRows { row: 1, expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn positions_set_dimensions() {
        let board = Board::from_positions(&[
            Position::new(3, 0, 'A'),
            Position::new(0, 1, 'b'),
            Position { x: 1, y: 1, letter: "!".to_string() },
        ]).unwrap();

        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 2);
        assert_eq!(format!("{}", board), "...a
b...
");
    }

    #[test]
    fn positions_rejected() {
        assert!(matches!(Board::from_positions(&[]), Err(Error::EmptyInput)));

        assert!(matches!(
            Board::from_positions(&[Position::new(1, 1, 'a'), Position::new(1, 1, 'b')]),
            Err(Error::InvalidPlacement(BuilderInvalidReason::DuplicatePlacement { location: Location(1, 1) }))
        ));

        let err = Board::from_positions(&[Position { x: 0, y: 0, letter: "qu".to_string() }]).unwrap_err();
        assert_eq!(err.to_string(), "invalid placement: letter \"qu\" at (0, 0) is not a single letter");
    }

    #[test]
    fn oversized_boards_rejected() {
        assert!(matches!(
            Board::from_positions(&[Position::new(4_000_000_000, 4_000_000_000, 'a')]),
            Err(Error::BoardTooLarge { width: 4_000_000_001, height: 4_000_000_001 })
        ));
        assert!(matches!(
            Board::from_positions(&[Position::new(usize::MAX, 0, 'a')]),
            Err(Error::BoardTooLarge { width: usize::MAX, height: 1 })
        ));
        assert!(matches!(
            Board::from_positions(&[Position::new(MAX_CELLS, 0, 'a')]),
            Err(Error::BoardTooLarge { .. })
        ));
        assert!(matches!(
            BoardBuilder::with_dims((NonZero::new(usize::MAX).unwrap(), NonZero::new(2).unwrap())),
            Err(Error::BoardTooLarge { .. })
        ));

        let widest = Board::from_positions(&[Position::new(MAX_CELLS - 1, 0, 'a')]).unwrap();
        assert_eq!(widest.width(), MAX_CELLS);
        assert_eq!(widest.height(), 1);

        let submission: Submission =
            serde_json::from_str(r#"{"positions": [{"x": 4000000000, "y": 4000000000, "letter": "a"}]}"#).unwrap();
        let words = WordList::default();
        let schedule = Schedule::builtin();
        let validator = PuzzleValidator::new(&words, &schedule);
        assert!(matches!(validator.validate(&submission, first_day()), Err(Error::BoardTooLarge { .. })));
    }

    #[test]
    fn builder_stays_invalid() {
        let mut builder = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(2).unwrap())).unwrap();
        builder.place(Location(0, 0), "c").place(Location(1, 0), "a");
        assert!(builder.is_valid().is_none());

        let saved = builder.clone();

        builder.place(Location(3, 0), "t").place(Location(2, 0), "t");
        assert_eq!(builder.is_valid(), Some(&[BuilderInvalidReason::OutOfBounds { location: Location(3, 0) }][..]));
        assert!(builder.build().is_err());

        let board = saved.build().unwrap();
        assert_eq!(format!("{}", board), "ca.
...
");
    }

    #[test]
    fn single_cell_access() {
        let mut board = Board::from_rows(&["..", ".."]).unwrap();
        board.set_cell(Location(1, 0), 'Q').unwrap();
        assert_eq!(board.cell(Location(1, 0)).unwrap(), Cell::Letter('q'));

        board.set_cell(Location(1, 0), '#').unwrap();
        assert_eq!(board.cell(Location(1, 0)).unwrap(), Cell::Empty);

        assert!(matches!(
            board.cell(Location(2, 0)),
            Err(Error::OutOfBounds { axis: BoardAxis::Column, index: 2, len: 2 })
        ));
        assert!(matches!(
            board.set_cell(Location(0, 5), 'a'),
            Err(Error::OutOfBounds { axis: BoardAxis::Row, index: 5, len: 2 })
        ));
    }

    #[test]
    fn axis_writes() {
        let mut board = Board::from_rows(&["....", "....", "....", "...."]).unwrap();
        board.set_row(0, 0..3, "DOG").unwrap();
        board.set_column(0, 0..3, "DOG").unwrap();
        board.set_row(2, 1..4, "OAT").unwrap();

        assert_eq!(format!("{}", board), "dog.
o...
goat
....
");
    }

    #[test]
    fn axis_reads() {
        let board = Board::from_rows(&["abcd", "efgh", "ijkl"]).unwrap();
        let letters = |cells: Vec<Cell>| cells.iter().map(|cell| cell.letter().unwrap()).collect::<String>();

        assert_eq!(letters(board.row(1, ..).unwrap()), "efgh");
        assert_eq!(letters(board.row(1, 1..).unwrap()), "fgh");
        assert_eq!(letters(board.row(1, ..2).unwrap()), "ef");
        assert_eq!(letters(board.row(0, AxisRange::full().step_by(2)).unwrap()), "ac");
        assert_eq!(letters(board.column(3, ..).unwrap()), "dhl");
        assert_eq!(letters(board.column(0, AxisRange::from(0..3).step_by(2)).unwrap()), "ai");
        assert!(board.row(0, 3..1).unwrap().is_empty());
    }

    #[test]
    fn axis_access_rejected() {
        let mut board = Board::from_rows(&["abc", "def"]).unwrap();

        assert!(matches!(board.row(0, 0..4), Err(Error::OutOfBounds { axis: BoardAxis::Column, index: 3, len: 3 })));
        assert!(matches!(board.column(0, ..3), Err(Error::OutOfBounds { axis: BoardAxis::Row, index: 2, len: 2 })));
        assert!(matches!(board.row(2, ..), Err(Error::OutOfBounds { axis: BoardAxis::Row, index: 2, len: 2 })));
        assert!(matches!(board.row(0, AxisRange::full().step_by(0)), Err(Error::UnsupportedAccess(_))));
        assert!(matches!(
            board.set_row(0, 0..3, "DO"),
            Err(Error::LengthMismatch { expected: 3, actual: 2 })
        ));
        assert!(matches!(
            board.set_column(2, .., "xyz"),
            Err(Error::LengthMismatch { expected: 2, actual: 3 })
        ));

        // nothing was written by the failed calls
        assert_eq!(format!("{}", board), "abc
def
");
    }

    #[test]
    fn region_reads() {
        let board = Board::from_rows(&["abcd", "efgh", "ijkl"]).unwrap();

        let region = board.region(0..2, AxisRange::from(1..4).step_by(2)).unwrap();
        assert_eq!(region, vec![
            vec![Cell::Letter('b'), Cell::Letter('d')],
            vec![Cell::Letter('f'), Cell::Letter('h')],
        ]);

        assert_eq!(board.region(.., ..).unwrap().len(), 3);
        assert!(board.region(2..2, ..).unwrap().is_empty());
        assert!(matches!(board.region(.., 0..5), Err(Error::OutOfBounds { axis: BoardAxis::Column, .. })));
    }

    #[test]
    fn words_single_row() {
        let board = Board::from_rows(&["cat"]).unwrap();
        assert_eq!(board.words(), vec!["cat"]);
    }

    #[test]
    fn words_skip_single_letters() {
        let board = Board::from_rows(&["a..", "...", "..b"]).unwrap();
        assert!(board.words().is_empty());

        let blank = Board::from_rows(&["...", "..."]).unwrap();
        assert!(blank.words().is_empty());
    }

    #[test]
    fn words_rows_then_columns() {
        let board = Board::from_rows(&["dog.", "o...", "goat", "...."]).unwrap();

        assert_eq!(board.words_along(Orientation::Across), vec!["dog", "goat"]);
        assert_eq!(board.words_along(Orientation::Down), vec!["dog"]);
        assert_eq!(board.words(), vec!["dog", "goat", "dog"]);

        let split = Board::from_rows(&["ab.cd.e", "f......"]).unwrap();
        assert_eq!(split.words(), vec!["ab", "cd", "af"]);
    }

    #[test]
    fn components_of_corners() {
        let board = Board::from_rows(&["a..", "...", "..b"]).unwrap();
        let components = board.components();

        assert_eq!(components.len(), 2);
        assert_eq!(components.sizes(), vec![1, 1]);
        assert_eq!(components.groups(), &[vec![Location(0, 0)], vec![Location(2, 2)]]);
        assert!(!components.is_connected());
    }

    #[test]
    fn components_follow_adjacency() {
        let board = Board::from_rows(&["dog.", "o..x", "goat", "...."]).unwrap();
        let components = board.components();

        assert_eq!(components.sizes(), vec![9]);
        assert!(components.is_connected());

        let mut group = components.groups()[0].clone();
        group.sort_by_key(|location| location.as_index());
        assert_eq!(group, vec![
            Location(0, 0), Location(1, 0), Location(2, 0),
            Location(0, 1), Location(3, 1),
            Location(0, 2), Location(1, 2), Location(2, 2), Location(3, 2),
        ]);

        // diagonal neighbours do not connect
        let diagonal = Board::from_rows(&["a.", ".b"]).unwrap();
        assert_eq!(diagonal.components().sizes(), vec![1, 1]);

        let blank = Board::from_rows(&[".."]).unwrap();
        assert!(blank.components().is_empty());
        assert!(blank.components().is_connected());
    }

    #[test]
    fn components_ordered_by_first_cell() {
        let board = Board::from_rows(&["..ab", "c...", "c.d."]).unwrap();
        let components = board.components();

        assert_eq!(components.sizes(), vec![2, 2, 1]);
        assert_eq!(components.groups()[2], vec![Location(2, 2)]);
    }

    #[test]
    fn bounding_box_area() {
        let full = Board::from_rows(&["abcd", "efgh", "ijkl", "mnop"]).unwrap();
        assert_eq!(full.bounding_box().unwrap().area(), 16);

        let single = Board::from_rows(&["...", ".x.", "..."]).unwrap();
        let bounds = single.bounding_box().unwrap();
        assert_eq!(bounds.rows, 1..=1);
        assert_eq!(bounds.columns, 1..=1);
        assert_eq!(bounds.area(), 1);

        let offset = Board::from_rows(&["....", "..a.", ".bc.", "...."]).unwrap();
        let bounds = offset.bounding_box().unwrap();
        assert_eq!((bounds.rows.clone(), bounds.columns.clone()), (1..=2, 1..=2));
        assert_eq!(bounds.area(), 4);

        let blank = Board::from_rows(&["....", "...."]).unwrap();
        assert!(matches!(blank.bounding_box(), Err(Error::EmptyGrid)));
    }

    #[test]
    fn repeated_queries_agree() {
        let board = Board::from_rows(&["cat.", "..o.", "..w."]).unwrap();

        assert_eq!(board.words(), board.words());
        assert_eq!(board.components(), board.components());
        assert_eq!(board.bounding_box().unwrap(), board.bounding_box().unwrap());
    }

    #[test]
    fn accepts_connected_word() {
        let dictionary = WordList::from_iter(["cat"]);
        let schedule = Schedule::builtin();
        let validator = PuzzleValidator::new(&dictionary, &schedule);

        let submission = Submission { positions: spell("CAT", Location(0, 0), Orientation::Across) };
        let verdict = validator.validate(&submission, first_day()).unwrap();

        assert!(verdict.is_accepted());
        assert_eq!(verdict.error, None);
        assert_eq!(verdict.words, vec!["cat"]);
        assert_eq!(verdict.word_check, vec![("cat".to_string(), true)]);
        assert_eq!(verdict.bounding_box_area, 3);
        assert_eq!(verdict.lowest_score, 20);
    }

    #[test]
    fn reports_disconnected_groups() {
        let dictionary = |word: &str| word == "cat";
        let schedule = Schedule::builtin();
        let validator = PuzzleValidator::new(&dictionary, &schedule);

        let mut positions = spell("cat", Location(0, 0), Orientation::Across);
        positions.extend(spell("cat", Location(0, 2), Orientation::Across));
        let verdict = validator.validate(&Submission { positions }, first_day()).unwrap();

        assert_eq!(verdict.error.as_deref(), Some(DISCONNECTED_MESSAGE));
        assert_eq!(verdict.words, vec!["cat", "cat"]);
        assert_eq!(verdict.word_check, vec![("cat".to_string(), true), ("cat".to_string(), true)]);
        assert_eq!(verdict.bounding_box_area, 9);
    }

    #[test]
    fn reports_rejected_words() {
        let dictionary = WordList::from_iter(["cat", "ca"]);
        let schedule = Schedule::builtin();
        let validator = PuzzleValidator::new(&dictionary, &schedule);

        let mut positions = spell("cat", Location(0, 0), Orientation::Across);
        positions.extend(spell("zz", Location(2, 1), Orientation::Down));
        // t, z, z down the last column
        let verdict = validator.validate(&Submission { positions }, first_day()).unwrap();

        assert_eq!(verdict.words, vec!["cat", "tzz"]);
        assert_eq!(verdict.error.as_deref(), Some("The following words are not allowed: tzz"));
        assert_eq!(verdict.word_check, vec![("cat".to_string(), true), ("tzz".to_string(), false)]);
        assert_eq!(verdict.rejected_words().collect::<Vec<_>>(), vec!["tzz"]);

        let verdict = validator
            .validate(&Submission { positions: spell("zzz", Location(0, 0), Orientation::Down) }, first_day())
            .unwrap();
        assert_eq!(verdict.error.as_deref(), Some("The following words are not allowed: zzz"));
        assert_eq!(verdict.word_check, vec![("zzz".to_string(), false)]);
        assert_eq!(verdict.bounding_box_area, 3);
    }

    #[test]
    fn disconnection_outranks_rejected_words() {
        let dictionary = WordList::from_iter(["cat"]);
        let schedule = Schedule::builtin();
        let validator = PuzzleValidator::new(&dictionary, &schedule);

        let mut positions = spell("cat", Location(0, 0), Orientation::Across);
        positions.extend(spell("zzz", Location(0, 2), Orientation::Across));
        let verdict = validator.validate(&Submission { positions }, first_day()).unwrap();

        assert_eq!(verdict.error.as_deref(), Some(DISCONNECTED_MESSAGE));
        assert_eq!(verdict.rejected_words().collect::<Vec<_>>(), vec!["zzz"]);
    }

    #[test]
    fn validation_hard_failures() {
        let dictionary = WordList::from_iter(["cat"]);
        let schedule = Schedule::builtin();
        let validator = PuzzleValidator::new(&dictionary, &schedule);

        assert!(matches!(validator.validate(&Submission::default(), first_day()), Err(Error::EmptyInput)));

        let blank = Submission { positions: vec![Position { x: 1, y: 1, letter: " ".to_string() }] };
        assert!(matches!(validator.validate(&blank, first_day()), Err(Error::EmptyGrid)));

        let cat = Submission { positions: spell("cat", Location(0, 0), Orientation::Across) };
        let unscheduled = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert!(matches!(validator.validate(&cat, unscheduled), Err(Error::NoPuzzleForDate(date)) if date == unscheduled));
    }

    #[test]
    fn verdict_wire_format() {
        let dictionary = WordList::from_iter(["cat"]);
        let schedule = Schedule::builtin();
        let validator = PuzzleValidator::new(&dictionary, &schedule);

        let submission: Submission = serde_json::from_str(
            r#"{"positions": [{"x": 0, "y": 0, "letter": "C"}, {"x": 1, "y": 0, "letter": "A"}, {"x": 2, "y": 0, "letter": "T"}]}"#,
        ).unwrap();
        let verdict = validator.validate(&submission, first_day()).unwrap();

        assert_eq!(serde_json::to_value(&verdict).unwrap(), serde_json::json!({
            "error": null,
            "words": ["cat"],
            "word_check": [["cat", true]],
            "bounding_box_area": 3,
            "lowest_score": 20
        }));

        assert!(serde_json::from_str::<Submission>(r#"{"positions": [{"x": -1, "y": 0, "letter": "a"}]}"#).is_err());
    }

    #[test]
    fn word_list_from_reader() {
        let words = WordList::from_reader("Cat\n\n# comment\n  dog  \ncat\n".as_bytes()).unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.is_valid_word("cat"));
        assert!(words.is_valid_word("DOG"));
        assert!(!words.is_valid_word("comment"));
        assert!(!words.is_valid_word(""));
    }

    #[test]
    fn schedule_lookup() {
        let schedule = Schedule::builtin();
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.puzzle_for(NaiveDate::from_ymd_opt(2023, 1, 8).unwrap()).unwrap().best_score, 16);

        let missing = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        assert_eq!(schedule.puzzle_for(missing).unwrap_err().to_string(), "no puzzle is scheduled for 2023-01-10");

        let parsed = Schedule::from_json(r#"{"2024-03-01": {"letters": "ABC", "best_score": 3}}"#).unwrap();
        assert_eq!(parsed.dates().collect::<Vec<_>>(), vec![NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()]);

        assert!(matches!(Schedule::from_json(r#"{"yesterday": {"letters": "A", "best_score": 1}}"#), Err(Error::MalformedSchedule(_))));
    }

    #[test]
    fn shuffled_letters_are_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let letters = "BARNAREALIARLADY";

        let shuffled = shuffle_letters(letters, &mut rng);
        let mut expected: Vec<char> = letters.chars().collect();
        let mut actual: Vec<char> = shuffled.chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);

        // the same seed yields the same order
        assert_eq!(shuffle_letters(letters, &mut StdRng::seed_from_u64(7)), shuffled);

        let daily = Schedule::builtin().daily_letters(first_day(), &mut rng).unwrap();
        assert_eq!(daily.len(), "MOLTEDAAVOPBOT".len());
    }
}
