//! Per-train loading worker: one train's lifecycle, end to end.

use std::thread;
use std::time::Duration;

use mts_core::Train;

use crate::arbiter::Arbiter;
use crate::observer::CrossingObserver;
use crate::SimResult;

/// Runs on the train's own thread.
///
/// Both sleeps happen outside the yard lock; the only shared-state touches
/// are the three protocol calls on `arbiter`.
pub(crate) fn run_train<O: CrossingObserver + ?Sized>(
    arbiter: &Arbiter,
    observer: &O,
    train: Train,
    unit: Duration,
) -> SimResult<()> {
    // Load in parallel with every other train.
    thread::sleep(train.loading.to_duration(unit));

    observer.on_ready(train.id, train.direction);
    arbiter.announce_arrival(train)?;

    // Blocks until the arbiter grants the track.
    arbiter.await_clearance(train.id)?;

    observer.on_track(train.id, train.direction);
    thread::sleep(train.crossing.to_duration(unit));
    observer.off_track(train.id, train.direction);

    arbiter.announce_crossed(train.id)
}
