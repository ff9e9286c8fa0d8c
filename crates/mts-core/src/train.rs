//! Train records and the lifecycle state machine.
//!
//! A train moves through exactly four states, each exactly once, in order:
//!
//! ```text
//! Loading ──▶ Waiting ──▶ Crossing ──▶ Done
//! ```
//!
//! `Loading` runs fully in parallel across trains; `Crossing` is globally
//! exclusive (the track admits one train at a time).

use std::fmt;

use crate::{TimeUnits, TrainId};

// ── Direction ─────────────────────────────────────────────────────────────────

/// Which end of the track a train approaches from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    West,
}

impl Direction {
    /// The other direction.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Human-readable label, matching the observation log's wording.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Priority ──────────────────────────────────────────────────────────────────

/// Express (`High`) versus regular (`Low`) service class.
///
/// Derived from the case of the direction letter in the timetable: uppercase
/// is `High`.  Variant order matters: `High > Low` under `Ord`, so queue
/// heads can be compared directly.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Low,
    High,
}

// ── TrainState ────────────────────────────────────────────────────────────────

/// Lifecycle phase of one train.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainState {
    /// Simulating the load delay; not yet visible to the arbiter.
    #[default]
    Loading,
    /// Enqueued in its direction's station queue.
    Waiting,
    /// Occupying the track.
    Crossing,
    /// Left the track; nothing further happens to this train.
    Done,
}

// ── Train ─────────────────────────────────────────────────────────────────────

/// One timetable entry.
///
/// `Train` is a plain value: lifecycle state is tracked by the yard (indexed
/// by id), not inside the record, so workers can own a copy without sharing
/// mutable train structs across threads.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Train {
    pub id:        TrainId,
    pub direction: Direction,
    pub priority:  Priority,
    /// Load delay before the train is eligible to cross.
    pub loading:   TimeUnits,
    /// Time the train occupies the track.
    pub crossing:  TimeUnits,
}
