//! The crossing driver: spawn workers, run the arbiter loop, join.

use std::thread;

use log::warn;

use mts_core::{SimConfig, Train, TrainId};

use crate::arbiter::Arbiter;
use crate::observer::CrossingObserver;
use crate::{worker, SimResult};

/// What a finished run reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Ids in the order the arbiter granted the track.
    pub dispatched: Vec<TrainId>,
    /// Trains whose worker could not be started; excluded from the run.
    pub skipped: Vec<TrainId>,
}

/// One simulation run over a fixed timetable.
pub struct Crossing {
    trains: Vec<Train>,
    config: SimConfig,
}

impl Crossing {
    /// Train ids must be the zero-based timetable indices (`0..trains.len()`);
    /// the yard's per-train bookkeeping is indexed by id.
    pub fn new(trains: Vec<Train>, config: SimConfig) -> Self {
        Self { trains, config }
    }

    /// Run the crossing to completion.
    ///
    /// Spawns one named worker thread per train, runs the arbiter loop on
    /// the calling thread, and joins every worker before returning (scoped
    /// threads — a worker cannot outlive the run).
    ///
    /// A worker that fails to spawn is forfeited: the train is excluded,
    /// the arbiter's expected count shrinks so the loop still terminates,
    /// and the id lands in [`RunSummary::skipped`].  An empty timetable
    /// returns immediately with an empty summary.
    pub fn run<O: CrossingObserver>(&self, observer: &O) -> SimResult<RunSummary> {
        let arbiter = Arbiter::new(self.trains.len(), self.config.clone());
        let unit = self.config.unit;
        let mut skipped = Vec::new();

        let dispatched = thread::scope(|scope| -> SimResult<Vec<TrainId>> {
            for &train in &self.trains {
                let spawned = thread::Builder::new()
                    .name(format!("train-{}", train.id))
                    .spawn_scoped(scope, {
                        let arbiter = &arbiter;
                        move || worker::run_train(arbiter, observer, train, unit)
                    });
                if let Err(e) = spawned {
                    warn!("could not start worker for train {}: {e}", train.id);
                    arbiter.forfeit(train.id)?;
                    skipped.push(train.id);
                }
            }
            arbiter.run()
        })?;

        Ok(RunSummary { dispatched, skipped })
    }
}
