//! Score and games-played counters for one learner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points for a successful address analysis.
pub const ANALYZE_POINTS: u32 = 5;
/// Points for opening the per-octet lesson.
pub const LESSON_POINTS: u32 = 2;
/// Points for a fully correct IP Detective round.
pub const DETECTIVE_POINTS: u32 = 10;

/// Progress owned by the front-end and passed to command handlers.
///
/// Field names match the snapshot format, so the struct is stored as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub last_played: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points and stamp the session as played now.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.touch();
        log::info!("+{points} points, score now {}", self.score);
    }

    pub fn record_game(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.touch();
    }

    fn touch(&mut self) {
        self.last_played = Some(Utc::now());
    }
}
