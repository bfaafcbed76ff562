pub const RECORD_LEN: usize = 20;

pub const FW_MAJOR_OFFSET: usize = 0;
pub const FW_MINOR_OFFSET: usize = 1;
pub const FW_BUILD_OFFSET: usize = 2;
pub const WATER_PRESSURE_RANGE: std::ops::Range<usize> = 3..7;
pub const WATER_TEMPERATURE_RANGE: std::ops::Range<usize> = 7..11;
pub const AIR_PRESSURE_RANGE: std::ops::Range<usize> = 11..15;
pub const AIR_TEMPERATURE_RANGE: std::ops::Range<usize> = 15..19;
pub const BATTERY_OFFSET: usize = 19;
