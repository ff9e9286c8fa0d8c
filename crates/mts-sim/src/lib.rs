//! `mts-sim` — the concurrent crossing core.
//!
//! # Protocol
//!
//! ```text
//! worker (one thread per train)          arbiter (driving thread)
//! ──────────────────────────────         ─────────────────────────────
//! sleep(loading)
//! READY, enqueue, notify arrival ──────▶ wait until a queue is non-empty
//! wait until cleared            ◀────── pop per policy, set cleared,
//!                                        notify dispatch
//! ON, sleep(crossing), OFF
//! mark Done, notify complete    ──────▶ wait for completion, clear track,
//!                                        loop until every train is Done
//! ```
//!
//! All shared state sits behind one mutex ([`arbiter::Yard`]); the three
//! condition variables live next to it in [`Arbiter`].  The lock is held
//! only for O(1) queue work and the decision logic, never across a sleep.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`queue`]    | `StationQueue` (per-direction FIFO)                 |
//! | [`arbiter`]  | `Yard`, `Arbiter`, the decision algorithm           |
//! | `worker`     | per-train lifecycle body (private)                  |
//! | [`crossing`] | `Crossing` driver, `RunSummary`                     |
//! | [`observer`] | `CrossingObserver`, `NoopObserver`                  |
//! | [`error`]    | `SimError`, `SimResult<T>`                          |

pub mod arbiter;
pub mod crossing;
pub mod error;
pub mod observer;
pub mod queue;

mod worker;


pub use arbiter::{Arbiter, Yard};
pub use crossing::{Crossing, RunSummary};
pub use error::{SimError, SimResult};
pub use observer::{CrossingObserver, NoopObserver};
pub use queue::StationQueue;
