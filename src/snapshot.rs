//! The persisted shape of a countdown.
//!
//! Stored as JSON under [`STORAGE_KEY`](crate::config::STORAGE_KEY):
//! `{"totalSeconds": 90, "isActive": true, "isPaused": false}`.

use crate::timer::{Countdown, Phase};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub total_seconds: u32,
    pub is_active: bool,
    pub is_paused: bool,
}

/// Why a stored snapshot could not be used.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON for a timer: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot is paused but not active")]
    PausedWhileInactive,
}

impl TimerSnapshot {
    /// Parse and validate a stored snapshot.
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: TimerSnapshot = serde_json::from_str(raw)?;
        if snapshot.is_paused && !snapshot.is_active {
            return Err(SnapshotError::PausedWhileInactive);
        }
        Ok(snapshot)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn phase(&self) -> Phase {
        match (self.is_active, self.is_paused) {
            (true, false) => Phase::Running,
            (true, true) => Phase::Paused,
            (false, _) => Phase::Idle,
        }
    }

    pub fn into_countdown(self) -> Countdown {
        Countdown::from_parts(self.total_seconds, self.phase())
    }
}

impl From<&Countdown> for TimerSnapshot {
    fn from(timer: &Countdown) -> Self {
        Self {
            total_seconds: timer.total_seconds(),
            is_active: timer.is_active(),
            is_paused: timer.is_paused(),
        }
    }
}
