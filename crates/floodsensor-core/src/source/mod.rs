mod webhook;

pub use webhook::{Base64Source, WebhookFileSource};

use thiserror::Error;

use crate::EnvelopeSummary;
use crate::envelope::EnvelopeError;

/// Raw record bytes plus the envelope they arrived in, when there was one.
#[derive(Debug, Clone)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub envelope: Option<EnvelopeSummary>,
}

pub trait PayloadSource {
    fn read_payload(&mut self) -> Result<Payload, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read payload input")]
    Io(#[from] std::io::Error),
    #[error("failed to unwrap webhook envelope")]
    Envelope(#[from] EnvelopeError),
}
