pub const RECORD_LEN: usize = 166;

pub const CABLE_LENGTH_RANGE: std::ops::Range<usize> = 0..2;
pub const SEND_START_WATER_LEVEL_RANGE: std::ops::Range<usize> = 2..6;
pub const SEND_INTERVAL_RANGE: std::ops::Range<usize> = 6..10;
pub const ALIVE_MODE_OFFSET: usize = 10;
pub const SCHEDULE_RANGE: std::ops::Range<usize> = 11..75;
pub const RESERVED_RANGE: std::ops::Range<usize> = 75..158;
pub const FW_MAJOR_OFFSET: usize = 158;
pub const FW_MINOR_OFFSET: usize = 159;
pub const FW_BUILD_OFFSET: usize = 160;
pub const HW_MAJOR_OFFSET: usize = 161;
pub const HW_MINOR_OFFSET: usize = 162;
pub const HW_BUILD_OFFSET: usize = 163;
pub const BATTERY_OFFSET: usize = 164;
pub const SYS_STATUS_OFFSET: usize = 165;

pub const RESERVED_LEN: usize = RESERVED_RANGE.end - RESERVED_RANGE.start;
