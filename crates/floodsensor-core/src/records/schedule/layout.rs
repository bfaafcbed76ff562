pub const SCHEDULE_LEN: usize = 64;

pub const INTERVAL_RANGE: std::ops::Range<usize> = 0..4;
pub const SLOTS_RANGE: std::ops::Range<usize> = 4..64;

pub const DAILY_SLOT_LEN: usize = 2;
pub const DAILY_SLOT_COUNT: usize = 30;
pub const DAILY_MINUTES_RANGE: std::ops::Range<usize> = 0..2;

pub const MONTHLY_SLOT_LEN: usize = 3;
pub const MONTHLY_SLOT_COUNT: usize = 20;
pub const MONTHLY_DAY_OFFSET: usize = 0;
pub const MONTHLY_MINUTES_RANGE: std::ops::Range<usize> = 1..3;

pub const MINUTES_PER_HOUR: i16 = 60;

pub const DISCRIMINATOR_MONTHLY: u8 = 0x00;
pub const DISCRIMINATOR_INTERVAL: u8 = 0x01;
pub const DISCRIMINATOR_DAILY: u8 = 0x02;
pub const DISCRIMINATOR_OFF: u8 = 0x03;
