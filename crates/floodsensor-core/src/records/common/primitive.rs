//! Little-endian scalar decoding.
//!
//! Every function takes a slice of the exact width of its target type. A
//! slice of any other width decodes to the type's zero value instead of
//! failing: callers slice at fixed offsets from a length-checked buffer, so
//! the fallback only fires on a layout bug.

use tracing::debug;

pub fn decode_i8(bytes: &[u8]) -> i8 {
    decode_le(bytes, i8::from_le_bytes)
}

pub fn decode_i16(bytes: &[u8]) -> i16 {
    decode_le(bytes, i16::from_le_bytes)
}

pub fn decode_i32(bytes: &[u8]) -> i32 {
    decode_le(bytes, i32::from_le_bytes)
}

pub fn decode_f32(bytes: &[u8]) -> f32 {
    decode_le(bytes, f32::from_le_bytes)
}

fn decode_le<const N: usize, T, F>(bytes: &[u8], convert: F) -> T
where
    T: Default,
    F: Fn([u8; N]) -> T,
{
    match <[u8; N]>::try_from(bytes) {
        Ok(raw) => convert(raw),
        Err(_) => {
            debug!(
                expected = N,
                actual = bytes.len(),
                "primitive decode fell back to zero"
            );
            T::default()
        }
    }
}
