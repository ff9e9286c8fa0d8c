use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A worker thread panicked while holding the yard lock.  The run cannot
    /// continue: the queues and counters it guarded are in an unknown state.
    #[error("yard lock poisoned by a panicked worker thread")]
    LockPoisoned,
}

pub type SimResult<T> = Result<T, SimError>;

impl<G> From<std::sync::PoisonError<G>> for SimError {
    fn from(_: std::sync::PoisonError<G>) -> Self {
        SimError::LockPoisoned
    }
}
