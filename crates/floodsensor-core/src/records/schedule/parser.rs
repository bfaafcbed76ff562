use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::discriminator::ScheduleDiscriminator;
use super::error::ScheduleError;
use super::layout;
use crate::records::common::{RecordReader, is_unset_slot};

/// Time-of-day entry of a daily schedule.
///
/// Hour and minute are derived from the raw minutes-since-midnight field with
/// truncating division, so out-of-range device values pass through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub hour: i16,
    pub minute: i16,
}

/// Day-of-month plus time-of-day entry of a monthly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyEntry {
    pub day: i8,
    pub hour: i16,
    pub minute: i16,
}

/// Decoded schedule sub-record. Only the three programmable shapes exist;
/// `Off` and unknown alive modes have no layout and never decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleSetting {
    Interval { seconds: i32 },
    Daily { entries: Vec<DailyEntry> },
    Monthly { entries: Vec<MonthlyEntry> },
}

impl ScheduleSetting {
    /// Discriminator this setting was decoded under.
    pub fn discriminator(&self) -> ScheduleDiscriminator {
        match self {
            Self::Interval { .. } => ScheduleDiscriminator::Interval,
            Self::Daily { .. } => ScheduleDiscriminator::Daily,
            Self::Monthly { .. } => ScheduleDiscriminator::Monthly,
        }
    }
}

/// Decode the 64-byte schedule sub-record according to `discriminator`.
///
/// Slots whose bytes are all `0xFF` are unprogrammed and omitted; remaining
/// entries keep slot order.
pub fn parse_schedule_setting(
    discriminator: ScheduleDiscriminator,
    payload: &[u8],
) -> Result<ScheduleSetting, ScheduleError> {
    let reader = RecordReader::new(payload);
    reader.require_exact_len(layout::SCHEDULE_LEN)?;

    let setting = match discriminator {
        ScheduleDiscriminator::Interval => ScheduleSetting::Interval {
            seconds: reader.read_i32_le(layout::INTERVAL_RANGE),
        },
        ScheduleDiscriminator::Daily => ScheduleSetting::Daily {
            entries: parse_daily_slots(reader.read_slice(layout::SLOTS_RANGE)),
        },
        ScheduleDiscriminator::Monthly => ScheduleSetting::Monthly {
            entries: parse_monthly_slots(reader.read_slice(layout::SLOTS_RANGE)),
        },
        ScheduleDiscriminator::Off | ScheduleDiscriminator::Unknown(_) => {
            return Err(ScheduleError::UnsupportedScheduleType { discriminator });
        }
    };

    debug!(%discriminator, "decoded schedule setting");
    Ok(setting)
}

fn parse_daily_slots(slots: &[u8]) -> Vec<DailyEntry> {
    slots
        .chunks_exact(layout::DAILY_SLOT_LEN)
        .enumerate()
        .filter(|(index, slot)| keep_slot(*index, slot))
        .map(|(_, slot)| {
            let reader = RecordReader::new(slot);
            let (hour, minute) = split_minutes(reader.read_i16_le(layout::DAILY_MINUTES_RANGE));
            DailyEntry { hour, minute }
        })
        .collect()
}

fn parse_monthly_slots(slots: &[u8]) -> Vec<MonthlyEntry> {
    slots
        .chunks_exact(layout::MONTHLY_SLOT_LEN)
        .enumerate()
        .filter(|(index, slot)| keep_slot(*index, slot))
        .map(|(_, slot)| {
            let reader = RecordReader::new(slot);
            let day = reader.read_i8(layout::MONTHLY_DAY_OFFSET);
            let (hour, minute) =
                split_minutes(reader.read_i16_le(layout::MONTHLY_MINUTES_RANGE));
            MonthlyEntry { day, hour, minute }
        })
        .collect()
}

fn keep_slot(index: usize, slot: &[u8]) -> bool {
    if is_unset_slot(slot) {
        trace!(slot = index, "skipping unset schedule slot");
        return false;
    }
    true
}

fn split_minutes(total: i16) -> (i16, i16) {
    (
        total / layout::MINUTES_PER_HOUR,
        total % layout::MINUTES_PER_HOUR,
    )
}

#[cfg(test)]
mod tests {
    use super::{DailyEntry, MonthlyEntry, ScheduleSetting, parse_schedule_setting};
    use crate::records::schedule::discriminator::ScheduleDiscriminator;
    use crate::records::schedule::error::ScheduleError;
    use crate::records::schedule::layout;

    fn unset_schedule() -> Vec<u8> {
        vec![0xff; layout::SCHEDULE_LEN]
    }

    fn daily_slot(index: usize) -> std::ops::Range<usize> {
        let start = layout::SLOTS_RANGE.start + index * layout::DAILY_SLOT_LEN;
        start..start + layout::DAILY_SLOT_LEN
    }

    fn monthly_slot(index: usize) -> std::ops::Range<usize> {
        let start = layout::SLOTS_RANGE.start + index * layout::MONTHLY_SLOT_LEN;
        start..start + layout::MONTHLY_SLOT_LEN
    }

    #[test]
    fn slot_counts_fill_the_slot_region() {
        let region = layout::SLOTS_RANGE.len();
        assert_eq!(region / layout::DAILY_SLOT_LEN, layout::DAILY_SLOT_COUNT);
        assert_eq!(region / layout::MONTHLY_SLOT_LEN, layout::MONTHLY_SLOT_COUNT);
    }

    #[test]
    fn parse_interval() {
        let mut payload = unset_schedule();
        payload[layout::INTERVAL_RANGE].copy_from_slice(&[0x0a, 0x00, 0x00, 0x00]);

        let parsed = parse_schedule_setting(ScheduleDiscriminator::Interval, &payload).unwrap();
        assert_eq!(parsed, ScheduleSetting::Interval { seconds: 10 });
        assert_eq!(parsed.discriminator(), ScheduleDiscriminator::Interval);
    }

    #[test]
    fn parse_daily_single_entry() {
        let mut payload = unset_schedule();
        payload[daily_slot(0)].copy_from_slice(&[0x5a, 0x00]);

        let parsed = parse_schedule_setting(ScheduleDiscriminator::Daily, &payload).unwrap();
        assert_eq!(
            parsed,
            ScheduleSetting::Daily {
                entries: vec![DailyEntry {
                    hour: 1,
                    minute: 30
                }]
            }
        );
    }

    #[test]
    fn parse_daily_all_unset_is_empty() {
        let payload = unset_schedule();
        let parsed = parse_schedule_setting(ScheduleDiscriminator::Daily, &payload).unwrap();
        assert_eq!(parsed, ScheduleSetting::Daily { entries: vec![] });
    }

    #[test]
    fn parse_daily_zero_slot_is_midnight() {
        let mut payload = unset_schedule();
        payload[daily_slot(3)].copy_from_slice(&[0x00, 0x00]);

        let parsed = parse_schedule_setting(ScheduleDiscriminator::Daily, &payload).unwrap();
        assert_eq!(
            parsed,
            ScheduleSetting::Daily {
                entries: vec![DailyEntry { hour: 0, minute: 0 }]
            }
        );
    }

    #[test]
    fn parse_daily_keeps_slot_order() {
        let mut payload = unset_schedule();
        payload[daily_slot(2)].copy_from_slice(&1439i16.to_le_bytes());
        payload[daily_slot(5)].copy_from_slice(&60i16.to_le_bytes());
        payload[daily_slot(29)].copy_from_slice(&615i16.to_le_bytes());

        let parsed = parse_schedule_setting(ScheduleDiscriminator::Daily, &payload).unwrap();
        assert_eq!(
            parsed,
            ScheduleSetting::Daily {
                entries: vec![
                    DailyEntry {
                        hour: 23,
                        minute: 59
                    },
                    DailyEntry { hour: 1, minute: 0 },
                    DailyEntry {
                        hour: 10,
                        minute: 15
                    },
                ]
            }
        );
    }

    #[test]
    fn parse_daily_partial_sentinel_is_an_entry() {
        let mut payload = unset_schedule();
        payload[daily_slot(0)].copy_from_slice(&[0xff, 0x00]);

        let parsed = parse_schedule_setting(ScheduleDiscriminator::Daily, &payload).unwrap();
        assert_eq!(
            parsed,
            ScheduleSetting::Daily {
                entries: vec![DailyEntry {
                    hour: 4,
                    minute: 15
                }]
            }
        );
    }

    #[test]
    fn parse_monthly_single_entry() {
        let mut payload = unset_schedule();
        payload[monthly_slot(0)].copy_from_slice(&[0x05, 0x1e, 0x00]);

        let parsed = parse_schedule_setting(ScheduleDiscriminator::Monthly, &payload).unwrap();
        assert_eq!(
            parsed,
            ScheduleSetting::Monthly {
                entries: vec![MonthlyEntry {
                    day: 5,
                    hour: 0,
                    minute: 30
                }]
            }
        );
    }

    #[test]
    fn parse_monthly_skips_unset_between_entries() {
        let mut payload = unset_schedule();
        payload[monthly_slot(1)].copy_from_slice(&[0x01, 0xe0, 0x01]);
        payload[monthly_slot(19)].copy_from_slice(&[0x1f, 0x9f, 0x05]);

        let parsed = parse_schedule_setting(ScheduleDiscriminator::Monthly, &payload).unwrap();
        assert_eq!(
            parsed,
            ScheduleSetting::Monthly {
                entries: vec![
                    MonthlyEntry {
                        day: 1,
                        hour: 8,
                        minute: 0
                    },
                    MonthlyEntry {
                        day: 31,
                        hour: 23,
                        minute: 59
                    },
                ]
            }
        );
    }

    #[test]
    fn parse_off_and_unknown_are_unsupported() {
        let payload = vec![0u8; layout::SCHEDULE_LEN];
        for discriminator in [
            ScheduleDiscriminator::Off,
            ScheduleDiscriminator::Unknown(0x09),
        ] {
            let err = parse_schedule_setting(discriminator, &payload).unwrap_err();
            assert_eq!(err, ScheduleError::UnsupportedScheduleType { discriminator });
            assert!(err.to_string().contains("unsupported schedule type"));
        }
    }

    #[test]
    fn parse_wrong_length() {
        let payload = vec![0u8; layout::SCHEDULE_LEN - 1];
        let err = parse_schedule_setting(ScheduleDiscriminator::Interval, &payload).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::LengthMismatch {
                expected: 64,
                actual: 63
            }
        );
    }
}
