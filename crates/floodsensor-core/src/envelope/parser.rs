use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::error::EnvelopeError;
use crate::EnvelopeSummary;

const PAYLOAD_KEY: &str = "data";

/// Webhook document posted by the device backend.
///
/// Every field is optional; missing objects deserialize to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub application: Application,
    pub router: Router,
    pub device: Device,
    pub uplink_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<WebhookDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub application_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Router {
    pub router_id: String,
    pub imsi: String,
    pub rssi: i64,
    pub battery: i64,
    pub fw_version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub device_id: String,
    pub sensor_id: String,
    pub sensor_name: String,
    pub rssi: i64,
    pub data: Map<String, Value>,
}

/// Upload time, sent either as RFC3339 text or as unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebhookDate {
    Text(String),
    Unix(i64),
}

impl WebhookDate {
    pub fn to_datetime(&self) -> Option<OffsetDateTime> {
        match self {
            WebhookDate::Text(text) => OffsetDateTime::parse(text, &Rfc3339).ok(),
            WebhookDate::Unix(secs) => OffsetDateTime::from_unix_timestamp(*secs).ok(),
        }
    }

    /// RFC3339 rendering, or the raw value when it does not parse.
    pub fn to_rfc3339(&self) -> String {
        if let Some(formatted) = self.to_datetime().and_then(|dt| dt.format(&Rfc3339).ok()) {
            return formatted;
        }
        match self {
            WebhookDate::Text(text) => text.clone(),
            WebhookDate::Unix(secs) => secs.to_string(),
        }
    }
}

impl Webhook {
    /// Base64 payload text carried at `device.data.data`.
    pub fn payload_base64(&self) -> Result<&str, EnvelopeError> {
        match self.device.data.get(PAYLOAD_KEY) {
            None => Err(EnvelopeError::MissingPayload),
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(_) => Err(EnvelopeError::PayloadNotString),
        }
    }

    /// Decoded binary payload.
    pub fn payload_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        decode_base64_payload(self.payload_base64()?)
    }

    pub fn summary(&self) -> EnvelopeSummary {
        EnvelopeSummary {
            application_id: non_empty(&self.application.application_id),
            router_id: non_empty(&self.router.router_id),
            device_id: non_empty(&self.device.device_id),
            sensor_id: non_empty(&self.device.sensor_id),
            sensor_name: non_empty(&self.device.sensor_name),
            uplink_id: non_empty(&self.uplink_id),
            date: self.date.as_ref().map(WebhookDate::to_rfc3339),
        }
    }
}

pub fn parse_webhook(json: &str) -> Result<Webhook, EnvelopeError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode standard-alphabet base64 text, ignoring surrounding whitespace.
pub fn decode_base64_payload(text: &str) -> Result<Vec<u8>, EnvelopeError> {
    Ok(STANDARD.decode(text.trim())?)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
