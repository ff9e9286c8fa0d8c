//! Simulated time units and run configuration.
//!
//! # Design
//!
//! Timetable durations are integer counts of an abstract simulated time
//! unit.  The mapping to wall-clock time lives in `SimConfig::unit`:
//!
//!   wall_time = units * unit
//!
//! Using an integer unit count as the canonical duration means timetable
//! arithmetic is exact and the decision sequence cannot depend on the unit
//! length — shrinking `unit` only compresses the run's real-time spacing,
//! which is how the tests run the full protocol in milliseconds.

use std::fmt;
use std::time::Duration;

// ── TimeUnits ─────────────────────────────────────────────────────────────────

/// A non-negative count of simulated time units.
///
/// The original timetables used a tenth of a second per unit; see
/// [`SimConfig::unit`] for the knob.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeUnits(pub u32);

impl TimeUnits {
    pub const ZERO: TimeUnits = TimeUnits(0);

    /// Convert to a wall-clock `Duration` at `unit` per time unit.
    #[inline]
    pub fn to_duration(self, unit: Duration) -> Duration {
        unit * self.0
    }
}

impl fmt::Display for TimeUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}u", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration, constructed by the application crate and
/// passed to the crossing driver.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Wall-clock length of one simulated time unit.  Default: 100 ms (the
    /// original tenth-of-a-second grain).
    pub unit: Duration,

    /// Maximum consecutive crossings granted to one direction while the
    /// other direction has a waiting train.  Fixed for the whole run.
    pub starvation_threshold: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            unit: Duration::from_millis(100),
            starvation_threshold: 4,
        }
    }
}
