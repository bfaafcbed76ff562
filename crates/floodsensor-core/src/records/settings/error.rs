use thiserror::Error;

use crate::records::common::LengthMismatch;
use crate::records::schedule::ScheduleError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("sensor settings length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("schedule decode failed")]
    Schedule(#[source] ScheduleError),
}

impl From<LengthMismatch> for SettingsError {
    fn from(value: LengthMismatch) -> Self {
        SettingsError::LengthMismatch {
            expected: value.expected,
            actual: value.actual,
        }
    }
}
