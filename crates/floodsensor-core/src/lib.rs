//! Flood sensor payload decoding.
//!
//! This crate turns the binary records uploaded by the flood sensor into
//! typed values and deterministic JSON reports. Payload sources feed the
//! decode layer, which drives the record decoders (layout/reader/parser) and
//! wraps the result in a [`Report`]. Decoding is byte-oriented and side-effect
//! free; file access is isolated in `source` and JSON envelope handling in
//! `envelope`.
//!
//! Wire format:
//! - Sensor reading: 20 bytes, little-endian.
//! - Sensor settings: 166 bytes, little-endian, embedding a 64-byte schedule
//!   whose shape is selected by the alive-mode byte.
//!
//! Invariants:
//! - A record is either fully decoded or rejected; there are no partial
//!   results.
//! - Every buffer is checked against its exact length before any read.
//! - Schedule slots made entirely of `0xFF` are omitted, never decoded.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use floodsensor_core::{RecordKind, decode_webhook_file};
//!
//! let report = decode_webhook_file(Path::new("sensor_data.json"), RecordKind::Auto)?;
//! println!("report version: {}", report.report_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod decode;
pub mod envelope;
pub mod records;
mod source;

pub use decode::{
    DecodeError, Record, RecordError, RecordKind, decode_payload_text, decode_record,
    decode_source, decode_webhook_file,
};
pub use envelope::{EnvelopeError, Webhook, WebhookDate, parse_webhook};
pub use records::primitive;
pub use records::reading::{ReadingError, SensorReading, parse_sensor_reading};
pub use records::schedule::{
    DailyEntry, MonthlyEntry, ScheduleDiscriminator, ScheduleError, ScheduleSetting,
    parse_schedule_setting,
};
pub use records::settings::{SensorSettings, SettingsError, parse_sensor_settings};
pub use records::version::VersionTriple;
pub use source::{Base64Source, Payload, PayloadSource, SourceError, WebhookFileSource};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Decoded payload with its provenance.
///
/// # Examples
/// ```
/// use floodsensor_core::{RecordKind, decode_record, make_report, InputInfo};
///
/// let record = decode_record(&[0u8; 20], RecordKind::Auto)?;
/// let input = InputInfo { path: None, payload_bytes: 20 };
/// let report = make_report(input, None, record);
/// assert_eq!(report.report_version, floodsensor_core::REPORT_VERSION);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Where the payload came from.
    pub input: InputInfo,
    /// Webhook identification, absent for bare base64 payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<EnvelopeSummary>,
    /// The decoded record, tagged by `kind`.
    pub record: Record,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "floodsensor").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
///
/// # Examples
/// ```
/// use floodsensor_core::InputInfo;
///
/// let input = InputInfo {
///     path: Some("sensor_data.json".to_string()),
///     payload_bytes: 20,
/// };
/// assert_eq!(input.payload_bytes, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder, when read from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Decoded payload size in bytes.
    pub payload_bytes: u64,
}

/// Identifying fields of the webhook envelope. Empty values are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uplink_id: Option<String>,
    /// Upload time, normalized to RFC3339 when it parses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Build a report around a decoded record.
pub fn make_report(input: InputInfo, envelope: Option<EnvelopeSummary>, record: Record) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "floodsensor".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input,
        envelope,
        record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_omits_optional_fields_when_none() {
        let record = decode_record(&[0u8; 20], RecordKind::Reading).expect("reading");
        let report = make_report(
            InputInfo {
                path: None,
                payload_bytes: 20,
            },
            Some(EnvelopeSummary {
                sensor_id: Some("fs-1".to_string()),
                ..EnvelopeSummary::default()
            }),
            record,
        );

        let value = serde_json::to_value(&report).expect("report json");
        assert!(value["input"].get("path").is_none());
        let envelope = value.get("envelope").expect("envelope");
        assert_eq!(envelope["sensor_id"], "fs-1");
        assert!(envelope.get("device_id").is_none());
        assert!(envelope.get("date").is_none());
        assert_eq!(value["record"]["kind"], "reading");
        assert_eq!(value["record"]["firmware"]["major"], 0);
    }

    #[test]
    fn settings_report_tags_schedule_type() {
        let mut payload = vec![0u8; 166];
        payload[10] = 0x01;
        payload[11..15].copy_from_slice(&3600i32.to_le_bytes());
        let record = decode_record(&payload, RecordKind::Auto).expect("settings");
        let report = make_report(
            InputInfo {
                path: Some("sensor_setting.json".to_string()),
                payload_bytes: 166,
            },
            None,
            record,
        );

        let value = serde_json::to_value(&report).expect("report json");
        assert!(value.get("envelope").is_none());
        assert_eq!(value["record"]["kind"], "settings");
        assert_eq!(value["record"]["alive_mode"], "interval");
        assert_eq!(value["record"]["schedule"]["type"], "interval");
        assert_eq!(value["record"]["schedule"]["seconds"], 3600);

        let restored: Report = serde_json::from_value(value).expect("report");
        assert_eq!(restored, report);
    }
}
