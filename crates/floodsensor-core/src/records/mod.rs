//! Fixed-layout record decoding.
//!
//! Each record kind follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `common::reader`: fixed-offset access over the primitive decoder
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; every buffer is checked against its
//! exact record length before any field is read.

pub(crate) mod common;
pub mod reading;
pub mod schedule;
pub mod settings;
pub mod version;

pub use common::primitive;
