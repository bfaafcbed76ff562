use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::records::reading::{self, ReadingError, SensorReading, parse_sensor_reading};
use crate::records::settings::{self, SensorSettings, SettingsError, parse_sensor_settings};
use crate::source::{Base64Source, Payload, PayloadSource, SourceError, WebhookFileSource};
use crate::{InputInfo, Report, make_report};

/// Which record layout a payload should be decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    /// Pick the layout whose exact length matches the payload.
    #[default]
    Auto,
    Reading,
    Settings,
}

/// One decoded record of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Reading(SensorReading),
    Settings(SensorSettings),
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("sensor reading decode failed")]
    Reading(#[from] ReadingError),
    #[error("sensor settings decode failed")]
    Settings(#[from] SettingsError),
    #[error(
        "payload length {actual} matches no record layout (reading: {}, settings: {})",
        reading::layout::RECORD_LEN,
        settings::layout::RECORD_LEN
    )]
    UnrecognizedLength { actual: usize },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload source failed")]
    Source(#[from] SourceError),
    #[error("record decode failed")]
    Record(#[from] RecordError),
}

pub fn decode_record(bytes: &[u8], kind: RecordKind) -> Result<Record, RecordError> {
    let kind = match kind {
        RecordKind::Auto => detect_kind(bytes.len())?,
        explicit => explicit,
    };
    match kind {
        RecordKind::Reading => Ok(Record::Reading(parse_sensor_reading(bytes)?)),
        RecordKind::Settings => Ok(Record::Settings(parse_sensor_settings(bytes)?)),
        RecordKind::Auto => Err(RecordError::UnrecognizedLength {
            actual: bytes.len(),
        }),
    }
}

fn detect_kind(len: usize) -> Result<RecordKind, RecordError> {
    match len {
        reading::layout::RECORD_LEN => Ok(RecordKind::Reading),
        settings::layout::RECORD_LEN => Ok(RecordKind::Settings),
        actual => Err(RecordError::UnrecognizedLength { actual }),
    }
}

pub fn decode_webhook_file(path: &Path, kind: RecordKind) -> Result<Report, DecodeError> {
    let source = WebhookFileSource::open(path)?;
    decode_source(Some(path), source, kind)
}

pub fn decode_payload_text(text: &str, kind: RecordKind) -> Result<Report, DecodeError> {
    decode_source(None, Base64Source::new(text), kind)
}

pub fn decode_source<S: PayloadSource>(
    path: Option<&Path>,
    mut source: S,
    kind: RecordKind,
) -> Result<Report, DecodeError> {
    let Payload { bytes, envelope } = source.read_payload()?;
    debug!(payload_bytes = bytes.len(), ?kind, "decoding payload");
    let record = decode_record(&bytes, kind)?;

    let input = InputInfo {
        path: path.map(|p| p.display().to_string()),
        payload_bytes: bytes.len() as u64,
    };
    Ok(make_report(input, envelope, record))
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordError, RecordKind, decode_payload_text, decode_record};
    use crate::records::reading::ReadingError;
    use crate::records::settings::SettingsError;

    #[test]
    fn auto_detects_by_length() {
        let reading = decode_record(&[0u8; 20], RecordKind::Auto).unwrap();
        assert!(matches!(reading, Record::Reading(_)));

        let mut settings = vec![0xffu8; 166];
        settings[10] = 0x02;
        let settings = decode_record(&settings, RecordKind::Auto).unwrap();
        assert!(matches!(settings, Record::Settings(_)));
    }

    #[test]
    fn auto_rejects_unknown_length() {
        let err = decode_record(&[0u8; 21], RecordKind::Auto).unwrap_err();
        assert!(matches!(err, RecordError::UnrecognizedLength { actual: 21 }));
        assert!(err.to_string().contains("matches no record layout"));
    }

    #[test]
    fn explicit_kind_reports_length_mismatch() {
        let err = decode_record(&[0u8; 166], RecordKind::Reading).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Reading(ReadingError::LengthMismatch {
                expected: 20,
                actual: 166
            })
        ));

        let err = decode_record(&[0u8; 20], RecordKind::Settings).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Settings(SettingsError::LengthMismatch {
                expected: 166,
                actual: 20
            })
        ));
    }

    #[test]
    fn error_chain_names_record_and_schedule() {
        let mut settings = vec![0u8; 166];
        settings[10] = 0x03;
        let err = decode_record(&settings, RecordKind::Auto).unwrap_err();

        let mut chain = vec![err.to_string()];
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            chain.push(inner.to_string());
            source = inner.source();
        }
        assert_eq!(
            chain,
            vec![
                "sensor settings decode failed",
                "schedule decode failed",
                "unsupported schedule type: Off (0x03)",
            ]
        );
    }

    #[test]
    fn payload_text_report_has_no_envelope() {
        let report = decode_payload_text("AAAAAAAAAAAAAAAAAAAAAAAAAAA=", RecordKind::Auto).unwrap();
        assert!(report.envelope.is_none());
        assert!(report.input.path.is_none());
        assert_eq!(report.input.payload_bytes, 20);
        assert!(matches!(report.record, Record::Reading(_)));
    }
}
