//! `mts-timetable` — timetable file parsing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`loader`] | `load_timetable`, `load_timetable_reader`     |
//! | [`error`]  | `TimetableError`, `TimetableResult<T>`        |
//!
//! A malformed timetable is fatal: the caller is expected to report the
//! error and exit non-zero before any worker thread starts.

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{TimetableError, TimetableResult};
pub use loader::{load_timetable, load_timetable_reader};
