//! Sensor reading record decoding.
//!
//! A reading is a 20-byte little-endian record: firmware version, water and
//! air pressure/temperature as `f32`, and battery level. The buffer length is
//! checked before any field is read; offsets live in `layout`.

pub mod error;
pub mod layout;
pub mod parser;

pub use error::ReadingError;
pub use parser::{SensorReading, parse_sensor_reading};
