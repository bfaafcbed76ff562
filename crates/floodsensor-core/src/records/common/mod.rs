pub mod primitive;
pub(crate) mod reader;

pub(crate) use reader::{LengthMismatch, RecordReader, is_unset_slot};
