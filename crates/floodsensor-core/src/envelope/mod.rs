//! Webhook envelope handling.
//!
//! The device backend posts a JSON document describing the application,
//! router and device; the binary record travels as standard base64 text at
//! `device.data.data`. This module unwraps that text into raw bytes and
//! summarizes the identifying fields for the report. It performs no I/O.

pub mod error;
pub mod parser;

pub use error::EnvelopeError;
pub use parser::{
    Application, Device, Router, Webhook, WebhookDate, decode_base64_payload, parse_webhook,
};
