use thiserror::Error;

/// Errors returned while unwrapping the webhook envelope.
///
/// # Examples
/// ```
/// use floodsensor_core::envelope::error::EnvelopeError;
///
/// let err = EnvelopeError::MissingPayload;
/// assert!(err.to_string().contains("device.data.data"));
/// ```
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("invalid webhook JSON")]
    Json(#[from] serde_json::Error),
    #[error("webhook has no payload at device.data.data")]
    MissingPayload,
    #[error("webhook payload at device.data.data is not a string")]
    PayloadNotString,
    #[error("invalid base64 payload")]
    Base64(#[from] base64::DecodeError),
}
