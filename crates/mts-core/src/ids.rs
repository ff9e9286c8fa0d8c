//! Strongly typed train identifier.
//!
//! The inner integer is `pub` to allow direct indexing into per-train `Vec`s
//! via `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Index of a train in timetable order (zero-based input line number).
///
/// Ids are assigned in ascending order and never reused, which makes them
/// the stable tie-break key wherever two trains are otherwise equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainId(pub u32);

impl TrainId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TrainId> for usize {
    #[inline(always)]
    fn from(id: TrainId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for TrainId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<TrainId, Self::Error> {
        u32::try_from(n).map(TrainId)
    }
}
