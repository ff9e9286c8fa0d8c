//! The arbiter: shared yard state, the decision algorithm, and the
//! dispatch protocol.
//!
//! # Synchronization layout
//!
//! Everything mutable is a field of [`Yard`] behind a single mutex; the
//! three condition variables sit next to it in [`Arbiter`]:
//!
//! | Condvar    | Signaled by                               | Woken party         |
//! |------------|-------------------------------------------|---------------------|
//! | `arrival`  | worker after enqueue; driver on a forfeit | arbiter loop        |
//! | `dispatch` | arbiter after clearing a train            | the released worker |
//! | `complete` | worker after leaving the track            | arbiter loop        |
//!
//! Every wait is a `Condvar::wait_while` whose predicate reads state under
//! the same lock the signaler writes it — there is no unsynchronized flag
//! anywhere, and a missed notification cannot strand a waiter.
//!
//! # Decision policy
//!
//! Priority class is the primary ranking signal, but an unconditional
//! priority rule would starve the low-priority direction whenever
//! high-priority trains keep arriving.  The forced-switch rule bounds that:
//! after `starvation_threshold` consecutive grants to one direction while
//! the other has a waiting train, the other direction goes next.

use std::cmp::Ordering;
use std::sync::{Condvar, Mutex, MutexGuard};

use mts_core::{Direction, SimConfig, Train, TrainId, TrainState};

use crate::queue::StationQueue;
use crate::{SimError, SimResult};

// ── Yard ──────────────────────────────────────────────────────────────────────

/// Everything the yard mutex guards: both station queues, the fairness
/// counters, the track marker, and per-train bookkeeping.
///
/// `Yard` itself is synchronization-free; all methods are called either
/// under the [`Arbiter`] lock or from single-threaded decision tests.
pub struct Yard {
    east: StationQueue,
    west: StationQueue,

    /// Direction served by the most recent dispatch.
    last_served: Option<Direction>,
    /// Back-to-back dispatches granted to `last_served`.
    consecutive: u32,

    /// Trains still expected to cross.  Decremented when a worker cannot be
    /// started, so the loop's termination condition stays reachable.
    expected: usize,
    /// Trains that have finished crossing.
    crossed_count: usize,

    /// The train currently on the track.  Written only by the arbiter loop;
    /// mutual exclusion over the track is this one field plus the
    /// dispatch-then-wait cycle in [`Arbiter::run`].
    on_track: Option<TrainId>,

    /// Per-train release flags, indexed by id.  A worker starts crossing
    /// only after the arbiter sets its flag under this same lock.
    cleared: Vec<bool>,
    /// Per-train lifecycle states, indexed by id.
    states: Vec<TrainState>,

    /// Ids in dispatch order — the determinism witness for a run.
    served: Vec<TrainId>,
}

impl Yard {
    /// A yard expecting `total` trains, all initially `Loading`.
    pub fn new(total: usize) -> Self {
        Self {
            east: StationQueue::new(),
            west: StationQueue::new(),
            last_served: None,
            consecutive: 0,
            expected: total,
            crossed_count: 0,
            on_track: None,
            cleared: vec![false; total],
            states: vec![TrainState::Loading; total],
            served: Vec::with_capacity(total),
        }
    }

    fn queue_mut(&mut self, direction: Direction) -> &mut StationQueue {
        match direction {
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        }
    }

    pub fn queue(&self, direction: Direction) -> &StationQueue {
        match direction {
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }

    /// A train finished loading: move it into its direction's queue.
    pub fn note_arrival(&mut self, train: Train) {
        self.states[train.id.index()] = TrainState::Waiting;
        self.queue_mut(train.direction).push(train);
    }

    /// A train left the track.
    pub fn note_crossed(&mut self, id: TrainId) {
        self.states[id.index()] = TrainState::Done;
        self.crossed_count += 1;
    }

    /// A train's worker could not be started; stop expecting it.
    pub fn forfeit(&mut self, id: TrainId) {
        self.states[id.index()] = TrainState::Done;
        self.expected -= 1;
    }

    /// All expected trains have crossed (or been forfeited).
    pub fn finished(&self) -> bool {
        self.crossed_count >= self.expected
    }

    pub fn state_of(&self, id: TrainId) -> TrainState {
        self.states[id.index()]
    }

    /// The train currently occupying the track, if any.
    pub fn on_track(&self) -> Option<TrainId> {
        self.on_track
    }

    pub fn last_served(&self) -> Option<Direction> {
        self.last_served
    }

    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }

    pub fn served(&self) -> &[TrainId] {
        &self.served
    }

    // ── Decision algorithm ────────────────────────────────────────────────

    /// Which direction crosses next, or `None` if nothing is waiting.
    ///
    /// With both queues non-empty:
    /// 1. forced switch once `last_served` has had `threshold` consecutive
    ///    grants (fairness overrides priority);
    /// 2. otherwise the higher-priority head wins;
    /// 3. equal priority sticks with `last_served`, and before any train
    ///    has crossed, the lower head id goes first (reproducibility).
    pub fn choose_direction(&self, threshold: u32) -> Option<Direction> {
        match (self.east.front(), self.west.front()) {
            (None, None) => None,
            (Some(_), None) => Some(Direction::East),
            (None, Some(_)) => Some(Direction::West),
            (Some(east_head), Some(west_head)) => {
                Some(self.arbitrate(east_head, west_head, threshold))
            }
        }
    }

    fn arbitrate(&self, east_head: &Train, west_head: &Train, threshold: u32) -> Direction {
        if let Some(last) = self.last_served {
            if self.consecutive >= threshold {
                return last.opposite();
            }
        }
        match east_head.priority.cmp(&west_head.priority) {
            Ordering::Greater => Direction::East,
            Ordering::Less => Direction::West,
            Ordering::Equal => match self.last_served {
                Some(last) => last,
                None if east_head.id < west_head.id => Direction::East,
                None => Direction::West,
            },
        }
    }

    /// Pop the next train per the policy, mark it `Crossing`, put it on the
    /// track, and update the fairness counters.
    ///
    /// Returns `None` when both queues are empty.  The counter resets to 1
    /// on *any* direction change, forced switches included.
    pub fn dispatch_next(&mut self, threshold: u32) -> Option<TrainId> {
        let direction = self.choose_direction(threshold)?;
        let train = self.queue_mut(direction).pop_front()?;

        self.states[train.id.index()] = TrainState::Crossing;
        self.cleared[train.id.index()] = true;
        self.on_track = Some(train.id);

        match self.last_served {
            Some(last) if last == direction => self.consecutive += 1,
            _ => {
                self.consecutive = 1;
                self.last_served = Some(direction);
            }
        }

        self.served.push(train.id);
        Some(train.id)
    }
}

// ── Arbiter ───────────────────────────────────────────────────────────────────

/// Shared handle binding the yard mutex to its condition variables.
///
/// One `Arbiter` exists per run; the driver shares it by reference with
/// every worker thread (scoped threads — no `Arc` needed).
pub struct Arbiter {
    config: SimConfig,
    yard: Mutex<Yard>,
    arrival: Condvar,
    dispatch: Condvar,
    complete: Condvar,
}

impl Arbiter {
    pub fn new(total: usize, config: SimConfig) -> Self {
        Self {
            config,
            yard: Mutex::new(Yard::new(total)),
            arrival: Condvar::new(),
            dispatch: Condvar::new(),
            complete: Condvar::new(),
        }
    }

    fn lock(&self) -> SimResult<MutexGuard<'_, Yard>> {
        self.yard.lock().map_err(SimError::from)
    }

    // ── Worker side ───────────────────────────────────────────────────────

    /// Enqueue a loaded train and wake the arbiter loop.
    pub(crate) fn announce_arrival(&self, train: Train) -> SimResult<()> {
        let mut yard = self.lock()?;
        yard.note_arrival(train);
        self.arrival.notify_one();
        Ok(())
    }

    /// Block until the arbiter clears this train to cross.
    ///
    /// The predicate reads the train's cleared flag under the same lock the
    /// arbiter holds when setting it — the condition-variable replacement
    /// for the racy spin-on-a-flag this design rules out.
    pub(crate) fn await_clearance(&self, id: TrainId) -> SimResult<()> {
        let yard = self.lock()?;
        let _yard = self
            .dispatch
            .wait_while(yard, |y| !y.cleared[id.index()])
            .map_err(SimError::from)?;
        Ok(())
    }

    /// Record a finished crossing and wake the arbiter loop.
    pub(crate) fn announce_crossed(&self, id: TrainId) -> SimResult<()> {
        let mut yard = self.lock()?;
        yard.note_crossed(id);
        self.complete.notify_one();
        Ok(())
    }

    /// Exclude a train whose worker never started, and wake the arbiter so
    /// it re-checks termination.
    pub(crate) fn forfeit(&self, id: TrainId) -> SimResult<()> {
        let mut yard = self.lock()?;
        yard.forfeit(id);
        self.arrival.notify_one();
        Ok(())
    }

    // ── Arbiter loop ──────────────────────────────────────────────────────

    /// Dispatch trains until every expected train has crossed.
    ///
    /// Runs on the driving thread.  Each iteration: sleep until something
    /// is waiting, pick a train under the lock, clear it, then sleep until
    /// it reports back.  One dispatch in flight at a time is what makes the
    /// track mutually exclusive — there is no separate track lock.
    ///
    /// Returns the ids in dispatch order.
    pub fn run(&self) -> SimResult<Vec<TrainId>> {
        let mut yard = self.lock()?;
        loop {
            yard = self
                .arrival
                .wait_while(yard, |y| {
                    y.queue(Direction::East).is_empty()
                        && y.queue(Direction::West).is_empty()
                        && !y.finished()
                })
                .map_err(SimError::from)?;

            if yard.finished() {
                return Ok(yard.served().to_vec());
            }

            let id = match yard.dispatch_next(self.config.starvation_threshold) {
                Some(id) => id,
                None => continue,
            };
            self.dispatch.notify_all();

            yard = self
                .complete
                .wait_while(yard, |y| y.state_of(id) != TrainState::Done)
                .map_err(SimError::from)?;
            yard.on_track = None;
        }
    }
}
