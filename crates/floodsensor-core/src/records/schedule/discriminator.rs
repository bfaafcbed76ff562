use std::fmt;

use serde::{Deserialize, Serialize};

use super::layout;

/// Alive-mode byte selecting the shape of the schedule sub-record.
///
/// Lookup is total: bytes outside the known codes map to `Unknown`, which
/// keeps the raw byte for diagnostics.
///
/// # Examples
/// ```
/// use floodsensor_core::ScheduleDiscriminator;
///
/// assert_eq!(ScheduleDiscriminator::from_byte(0x02), ScheduleDiscriminator::Daily);
/// assert_eq!(ScheduleDiscriminator::from_byte(0x42).code(), 0x42);
/// assert_eq!(ScheduleDiscriminator::Monthly.name(), "Monthly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleDiscriminator {
    Monthly,
    Interval,
    Daily,
    Off,
    Unknown(u8),
}

impl ScheduleDiscriminator {
    pub fn from_byte(value: u8) -> Self {
        match value {
            layout::DISCRIMINATOR_MONTHLY => Self::Monthly,
            layout::DISCRIMINATOR_INTERVAL => Self::Interval,
            layout::DISCRIMINATOR_DAILY => Self::Daily,
            layout::DISCRIMINATOR_OFF => Self::Off,
            other => Self::Unknown(other),
        }
    }

    /// Wire byte for this discriminator.
    pub fn code(self) -> u8 {
        match self {
            Self::Monthly => layout::DISCRIMINATOR_MONTHLY,
            Self::Interval => layout::DISCRIMINATOR_INTERVAL,
            Self::Daily => layout::DISCRIMINATOR_DAILY,
            Self::Off => layout::DISCRIMINATOR_OFF,
            Self::Unknown(raw) => raw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Interval => "Interval",
            Self::Daily => "Daily",
            Self::Off => "Off",
            Self::Unknown(_) => "Unknown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Monthly => "day-of-month schedule",
            Self::Interval => "fixed interval",
            Self::Daily => "daily schedule",
            Self::Off => "alive notification off",
            Self::Unknown(_) => "unknown alive mode",
        }
    }
}

impl fmt::Display for ScheduleDiscriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.name(), self.code())
    }
}
