use thiserror::Error;

use super::discriminator::ScheduleDiscriminator;
use crate::records::common::LengthMismatch;

/// Errors returned by schedule sub-record decoding.
///
/// # Examples
/// ```
/// use floodsensor_core::records::schedule::error::ScheduleError;
///
/// let err = ScheduleError::LengthMismatch { expected: 64, actual: 63 };
/// assert!(err.to_string().contains("length mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("schedule length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("unsupported schedule type: {discriminator}")]
    UnsupportedScheduleType {
        discriminator: ScheduleDiscriminator,
    },
}

impl From<LengthMismatch> for ScheduleError {
    fn from(value: LengthMismatch) -> Self {
        ScheduleError::LengthMismatch {
            expected: value.expected,
            actual: value.actual,
        }
    }
}
