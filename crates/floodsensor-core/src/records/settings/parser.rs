use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SettingsError;
use super::layout;
use crate::records::common::RecordReader;
use crate::records::schedule::{ScheduleDiscriminator, ScheduleSetting, parse_schedule_setting};
use crate::records::version::VersionTriple;

/// Configuration snapshot uploaded by the flood sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSettings {
    pub cable_length: i16,
    pub send_start_water_level: f32,
    pub send_interval: i32,
    pub alive_mode: ScheduleDiscriminator,
    pub schedule: ScheduleSetting,
    /// Reserved region, uninterpreted.
    #[serde(with = "reserved_hex")]
    pub reserved: Vec<u8>,
    pub firmware: VersionTriple,
    pub hardware: VersionTriple,
    pub battery: i8,
    pub sys_status: u8,
}

pub fn parse_sensor_settings(payload: &[u8]) -> Result<SensorSettings, SettingsError> {
    let reader = RecordReader::new(payload);
    reader.require_exact_len(layout::RECORD_LEN)?;

    let alive_mode = ScheduleDiscriminator::from_byte(reader.read_u8(layout::ALIVE_MODE_OFFSET));
    let schedule = parse_schedule_setting(alive_mode, reader.read_slice(layout::SCHEDULE_RANGE))
        .map_err(SettingsError::Schedule)?;

    let settings = SensorSettings {
        cable_length: reader.read_i16_le(layout::CABLE_LENGTH_RANGE),
        send_start_water_level: reader.read_f32_le(layout::SEND_START_WATER_LEVEL_RANGE),
        send_interval: reader.read_i32_le(layout::SEND_INTERVAL_RANGE),
        alive_mode,
        schedule,
        reserved: reader.read_slice(layout::RESERVED_RANGE).to_vec(),
        firmware: VersionTriple::new(
            reader.read_i8(layout::FW_MAJOR_OFFSET),
            reader.read_i8(layout::FW_MINOR_OFFSET),
            reader.read_i8(layout::FW_BUILD_OFFSET),
        ),
        hardware: VersionTriple::new(
            reader.read_i8(layout::HW_MAJOR_OFFSET),
            reader.read_i8(layout::HW_MINOR_OFFSET),
            reader.read_i8(layout::HW_BUILD_OFFSET),
        ),
        battery: reader.read_i8(layout::BATTERY_OFFSET),
        sys_status: reader.read_u8(layout::SYS_STATUS_OFFSET),
    };

    debug!(
        alive_mode = %settings.alive_mode,
        firmware = %settings.firmware,
        hardware = %settings.hardware,
        "decoded sensor settings"
    );
    Ok(settings)
}

mod reserved_hex {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex::decode(&text).map_err(D::Error::custom)
    }
}
