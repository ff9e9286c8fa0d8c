//! Console observer: the formatted observation log.
//!
//! Output matches the original program, one line per event:
//!
//! ```text
//! 00:00:01.0 Train  2 is ready to go East
//! 00:00:01.0 Train  2 is ON the main track going East
//! 00:00:01.6 Train  2 is OFF the main track after going East
//! ```
//!
//! Timestamps are elapsed wall time since the run started, to a tenth of a
//! second.  Only the relative event ordering is a core guarantee; the
//! timestamps are cosmetic and track real sleeps.

use std::time::{Duration, Instant};

use mts_core::{Direction, TrainId};
use mts_sim::CrossingObserver;

/// Prints each observation to stdout with an elapsed-time stamp.
pub struct ConsoleObserver {
    start: Instant,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    fn stamp(&self) -> String {
        format_elapsed(self.start.elapsed())
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossingObserver for ConsoleObserver {
    fn on_ready(&self, id: TrainId, direction: Direction) {
        println!("{} Train {:2} is ready to go {}", self.stamp(), id, direction);
    }

    fn on_track(&self, id: TrainId, direction: Direction) {
        println!(
            "{} Train {:2} is ON the main track going {}",
            self.stamp(),
            id,
            direction
        );
    }

    fn off_track(&self, id: TrainId, direction: Direction) {
        println!(
            "{} Train {:2} is OFF the main track after going {}",
            self.stamp(),
            id,
            direction
        );
    }
}

/// `hh:mm:ss.d` — elapsed time to a tenth of a second.
pub fn format_elapsed(elapsed: Duration) -> String {
    let tenths = elapsed.as_millis() / 100;
    let secs = tenths / 10;
    format!(
        "{:02}:{:02}:{:02}.{}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        tenths % 10
    )
}
