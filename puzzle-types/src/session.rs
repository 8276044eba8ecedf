use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle of one puzzle attempt. `Finished` is terminal; starting over
/// means building a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionPhase {
    Setup,
    Playing,
    Finished,
}

/// Host-supplied parameters for one puzzle.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PuzzleConfig {
    pub category: String,
    pub grid_size: usize,
    pub total_points: i32,
    pub time_limit_secs: u32,
}

/// Final payload for the progress-tracking collaborator, emitted exactly
/// once when a session finishes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PuzzleResult {
    pub category: String,
    pub score: i32,
    pub time_used_secs: u32,
    pub perfect_score: bool,
    pub total_words: usize,
    pub solved_words: usize,
    /// 0-100
    pub completion_rate: u32,
    pub time_per_word: f32,
    pub finished_at: String, // ISO 8601 string
}
