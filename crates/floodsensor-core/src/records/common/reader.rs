use std::ops::Range;

use super::primitive;

/// Exact-length check failure shared by every fixed-layout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Fixed-offset view over a record buffer.
///
/// Reads never fail: a range outside the buffer yields an empty slice, which
/// the primitive decoder turns into zero. Parsers call `require_exact_len`
/// before reading so that path stays unreachable for valid layouts.
pub(crate) struct RecordReader<'a> {
    payload: &'a [u8],
}

impl<'a> RecordReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_exact_len(&self, expected: usize) -> Result<(), LengthMismatch> {
        if self.payload.len() != expected {
            return Err(LengthMismatch {
                expected,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: Range<usize>) -> &'a [u8] {
        self.payload.get(range).unwrap_or_default()
    }

    pub fn read_u8(&self, offset: usize) -> u8 {
        self.payload.get(offset).copied().unwrap_or_default()
    }

    pub fn read_i8(&self, offset: usize) -> i8 {
        primitive::decode_i8(self.read_slice(offset..offset + 1))
    }

    pub fn read_i16_le(&self, range: Range<usize>) -> i16 {
        primitive::decode_i16(self.read_slice(range))
    }

    pub fn read_i32_le(&self, range: Range<usize>) -> i32 {
        primitive::decode_i32(self.read_slice(range))
    }

    pub fn read_f32_le(&self, range: Range<usize>) -> f32 {
        primitive::decode_f32(self.read_slice(range))
    }
}

/// A fixed-width slot whose bytes are all `0xFF` was never programmed.
pub(crate) fn is_unset_slot(slot: &[u8]) -> bool {
    slot.iter().all(|&b| b == 0xff)
}
