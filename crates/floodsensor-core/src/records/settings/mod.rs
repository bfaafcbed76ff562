//! Sensor settings record decoding.
//!
//! Settings are a 166-byte little-endian snapshot of the device
//! configuration. The alive-mode byte at offset 10 selects how the following
//! 64-byte schedule region is decoded (see `records::schedule`); a schedule
//! failure aborts the whole record. The 83-byte reserved region is carried
//! through untouched.

pub mod error;
pub mod layout;
pub mod parser;

pub use error::SettingsError;
pub use parser::{SensorSettings, parse_sensor_settings};
