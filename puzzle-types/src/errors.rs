use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::SessionPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PuzzleError {
    #[error("puzzle has no placed words")]
    EmptyPuzzle,
    #[error("session is not in setup (current phase: {current:?})")]
    NotInSetup { current: SessionPhase },
}
