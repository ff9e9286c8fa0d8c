//! Observation stream trait.
//!
//! The core emits exactly three ordered events per train: READY (enqueued,
//! waiting), ON (granted the track), OFF (finished crossing).  Formatting
//! and timestamping are the consumer's concern; the core only guarantees
//! the relative order — a train's three events are totally ordered, and no
//! train's ON/OFF window overlaps another's.

use mts_core::{Direction, TrainId};

/// Callbacks invoked by the crossing core as trains move through their
/// lifecycle.
///
/// Methods take `&self` because workers call them concurrently from their
/// own threads; implementors that accumulate state use interior mutability.
/// All methods have default no-op implementations.
pub trait CrossingObserver: Send + Sync {
    /// The train finished loading and entered its station queue.
    fn on_ready(&self, _id: TrainId, _direction: Direction) {}

    /// The train was granted the track and begins crossing.
    fn on_track(&self, _id: TrainId, _direction: Direction) {}

    /// The train finished crossing and left the track.
    fn off_track(&self, _id: TrainId, _direction: Direction) {}
}

/// A [`CrossingObserver`] that does nothing.  Use when you need to run a
/// crossing but don't care about the event stream.
pub struct NoopObserver;

impl CrossingObserver for NoopObserver {}
