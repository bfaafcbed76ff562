//! Schedule sub-record decoding.
//!
//! The settings record carries a 64-byte schedule region whose shape is
//! selected by the alive-mode discriminator byte: a 32-bit interval in
//! seconds, up to 30 daily times, or up to 20 day-of-month times. Slots of
//! the list shapes that are entirely `0xFF` are unprogrammed and skipped
//! before any field is decoded.
//!
//! `Off` and unknown discriminators have no layout and are rejected.

pub mod discriminator;
pub mod error;
pub mod layout;
pub mod parser;

pub use discriminator::ScheduleDiscriminator;
pub use error::ScheduleError;
pub use parser::{DailyEntry, MonthlyEntry, ScheduleSetting, parse_schedule_setting};
