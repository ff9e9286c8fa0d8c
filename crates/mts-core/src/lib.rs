//! `mts-core` — foundational types for the `mts` level-crossing scheduler.
//!
//! This crate is a dependency of every other `mts-*` crate.  It intentionally
//! has no `mts-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `TrainId`                                         |
//! | [`train`]  | `Direction`, `Priority`, `TrainState`, `Train`    |
//! | [`time`]   | `TimeUnits`, `SimConfig`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod time;
pub mod train;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::TrainId;
pub use time::{SimConfig, TimeUnits};
pub use train::{Direction, Priority, Train, TrainState};
