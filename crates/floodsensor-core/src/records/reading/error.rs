use thiserror::Error;

use crate::records::common::LengthMismatch;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    #[error("sensor reading length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl From<LengthMismatch> for ReadingError {
    fn from(value: LengthMismatch) -> Self {
        ReadingError::LengthMismatch {
            expected: value.expected,
            actual: value.actual,
        }
    }
}
