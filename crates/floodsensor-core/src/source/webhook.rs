use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Payload, PayloadSource, SourceError};
use crate::envelope::{decode_base64_payload, parse_webhook};

/// Webhook JSON document on disk.
pub struct WebhookFileSource {
    path: PathBuf,
    json: String,
}

impl WebhookFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let json = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            json,
        })
    }
}

impl PayloadSource for WebhookFileSource {
    fn read_payload(&mut self) -> Result<Payload, SourceError> {
        let webhook = parse_webhook(&self.json)?;
        let bytes = webhook.payload_bytes()?;
        debug!(
            path = %self.path.display(),
            payload_bytes = bytes.len(),
            "read webhook payload"
        );
        Ok(Payload {
            bytes,
            envelope: Some(webhook.summary()),
        })
    }
}

/// Bare base64 payload text, without an envelope.
pub struct Base64Source {
    text: String,
}

impl Base64Source {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PayloadSource for Base64Source {
    fn read_payload(&mut self) -> Result<Payload, SourceError> {
        let bytes = decode_base64_payload(&self.text)?;
        Ok(Payload {
            bytes,
            envelope: None,
        })
    }
}
