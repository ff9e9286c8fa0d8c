//! Timetable loader.
//!
//! # File format
//!
//! One line per train, three whitespace-separated fields:
//!
//! ```text
//! E 10 6
//! w 5 2
//! e 3 10
//! ```
//!
//! **Direction field** — one letter; the case carries the priority class:
//!
//! | Letter | Direction | Priority |
//! |--------|-----------|----------|
//! | `E`    | East      | High     |
//! | `e`    | East      | Low      |
//! | `W`    | West      | High     |
//! | `w`    | West      | Low      |
//!
//! The second and third fields are the loading and crossing durations as
//! non-negative integers in simulated time units.  Train ids are assigned
//! from the zero-based line index.
//!
//! Fields may be separated by any run of spaces or tabs; blank lines are
//! skipped.  Timetables are tiny (one short line per train), so the loader
//! reads the whole input up front and normalizes separators before parsing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mts_core::{Direction, Priority, TimeUnits, Train, TrainId};

use crate::TimetableError;

// ── Timetable record ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimetableRecord {
    direction: String,
    loading:   u32,
    crossing:  u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `Train` records from a timetable file.
///
/// Ids are assigned in file order.  Any unreadable file or malformed line
/// fails the whole load; partial timetables are never returned.
pub fn load_timetable(path: &Path) -> Result<Vec<Train>, TimetableError> {
    let file = std::fs::File::open(path).map_err(TimetableError::Io)?;
    load_timetable_reader(file)
}

/// Like [`load_timetable`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_timetable_reader<R: Read>(mut reader: R) -> Result<Vec<Train>, TimetableError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).map_err(TimetableError::Io)?;
    let normalized = normalize_separators(&raw);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .from_reader(normalized.as_bytes());

    let mut trains = Vec::new();
    for (index, result) in csv_reader.deserialize::<TimetableRecord>().enumerate() {
        let row = result.map_err(|e| TimetableError::Parse {
            line: index + 1,
            msg:  e.to_string(),
        })?;

        let (direction, priority) =
            parse_direction(&row.direction).ok_or_else(|| TimetableError::Parse {
                line: index + 1,
                msg:  format!(
                    "invalid direction {:?}: expected one of E, e, W, w",
                    row.direction
                ),
            })?;

        trains.push(Train {
            id: TrainId(index as u32),
            direction,
            priority,
            loading: TimeUnits(row.loading),
            crossing: TimeUnits(row.crossing),
        });
    }

    Ok(trains)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Collapse each line's whitespace runs to single spaces so the reader
/// accepts tabs and multi-space separators, as the original files did.
fn normalize_separators(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_direction(s: &str) -> Option<(Direction, Priority)> {
    match s {
        "E" => Some((Direction::East, Priority::High)),
        "e" => Some((Direction::East, Priority::Low)),
        "W" => Some((Direction::West, Priority::High)),
        "w" => Some((Direction::West, Priority::Low)),
        _ => None,
    }
}
