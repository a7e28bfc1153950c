//! Learner progress.
//!
//! - [`state`] - score and games-played counters
//! - [`progress`] - JSON snapshot on disk

mod progress;
mod state;

pub use progress::ProgressFile;
pub use state::{SessionState, ANALYZE_POINTS, DETECTIVE_POINTS, LESSON_POINTS};
