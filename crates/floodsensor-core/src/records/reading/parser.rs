use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ReadingError;
use super::layout;
use crate::records::common::RecordReader;
use crate::records::version::VersionTriple;

/// Periodic measurement uploaded by the flood sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub firmware: VersionTriple,
    pub water_pressure: f32,
    pub water_temperature: f32,
    pub air_pressure: f32,
    pub air_temperature: f32,
    pub battery: i8,
}

pub fn parse_sensor_reading(payload: &[u8]) -> Result<SensorReading, ReadingError> {
    let reader = RecordReader::new(payload);
    reader.require_exact_len(layout::RECORD_LEN)?;

    let reading = SensorReading {
        firmware: VersionTriple::new(
            reader.read_i8(layout::FW_MAJOR_OFFSET),
            reader.read_i8(layout::FW_MINOR_OFFSET),
            reader.read_i8(layout::FW_BUILD_OFFSET),
        ),
        water_pressure: reader.read_f32_le(layout::WATER_PRESSURE_RANGE),
        water_temperature: reader.read_f32_le(layout::WATER_TEMPERATURE_RANGE),
        air_pressure: reader.read_f32_le(layout::AIR_PRESSURE_RANGE),
        air_temperature: reader.read_f32_le(layout::AIR_TEMPERATURE_RANGE),
        battery: reader.read_i8(layout::BATTERY_OFFSET),
    };

    debug!(firmware = %reading.firmware, "decoded sensor reading");
    Ok(reading)
}
