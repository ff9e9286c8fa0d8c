//! Unit tests for the timetable loader.

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use mts_core::{Direction, Priority, TimeUnits, TrainId};

    use crate::load_timetable_reader;

    const TIMETABLE: &[u8] = b"\
E 10 6\n\
w 5 2\n\
e 3 10\n\
W 0 1\n\
";

    #[test]
    fn loads_all_lines_in_order() {
        let trains = load_timetable_reader(Cursor::new(TIMETABLE)).unwrap();
        assert_eq!(trains.len(), 4);
        let ids: Vec<TrainId> = trains.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TrainId(0), TrainId(1), TrainId(2), TrainId(3)]);
    }

    #[test]
    fn direction_and_priority_from_letter_case() {
        let trains = load_timetable_reader(Cursor::new(TIMETABLE)).unwrap();
        assert_eq!(trains[0].direction, Direction::East);
        assert_eq!(trains[0].priority, Priority::High);
        assert_eq!(trains[1].direction, Direction::West);
        assert_eq!(trains[1].priority, Priority::Low);
        assert_eq!(trains[2].direction, Direction::East);
        assert_eq!(trains[2].priority, Priority::Low);
        assert_eq!(trains[3].direction, Direction::West);
        assert_eq!(trains[3].priority, Priority::High);
    }

    #[test]
    fn durations_parsed_as_time_units() {
        let trains = load_timetable_reader(Cursor::new(TIMETABLE)).unwrap();
        assert_eq!(trains[0].loading, TimeUnits(10));
        assert_eq!(trains[0].crossing, TimeUnits(6));
        // Zero loading time is legal: the train is ready immediately.
        assert_eq!(trains[3].loading, TimeUnits::ZERO);
    }

    #[test]
    fn tab_separated_fields_accepted() {
        let trains = load_timetable_reader(Cursor::new(b"E\t1\t2\n".as_slice())).unwrap();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].direction, Direction::East);
        assert_eq!(trains[0].loading, TimeUnits(1));
        assert_eq!(trains[0].crossing, TimeUnits(2));
    }

    #[test]
    fn whitespace_runs_accepted() {
        // Multi-space and mixed space/tab separators, plus padding at the
        // line ends — all fine, as with the original's token scanning.
        let input = b"E  1 2\n  w \t 5\t\t2  \n";
        let trains = load_timetable_reader(Cursor::new(input.as_slice())).unwrap();
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[1].direction, Direction::West);
        assert_eq!(trains[1].loading, TimeUnits(5));
    }

    #[test]
    fn blank_lines_skipped() {
        let input = b"E 1 2\n\nw 3 4\n";
        let trains = load_timetable_reader(Cursor::new(input.as_slice())).unwrap();
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[1].id, TrainId(1));
    }

    #[test]
    fn empty_timetable_is_empty_run() {
        let trains = load_timetable_reader(Cursor::new(b"".as_slice())).unwrap();
        assert!(trains.is_empty());
    }

    #[test]
    fn invalid_direction_letter_errors() {
        let bad = b"N 1 2\n";
        let result = load_timetable_reader(Cursor::new(bad.as_slice()));
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_duration_errors() {
        let bad = b"E ten 2\n";
        let result = load_timetable_reader(Cursor::new(bad.as_slice()));
        assert!(result.is_err());
    }

    #[test]
    fn missing_field_errors() {
        let bad = b"E 1\n";
        let result = load_timetable_reader(Cursor::new(bad.as_slice()));
        assert!(result.is_err());
    }

    #[test]
    fn error_reports_one_based_line() {
        let bad = b"E 1 2\nX 1 2\n";
        let err = load_timetable_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
    }
}
