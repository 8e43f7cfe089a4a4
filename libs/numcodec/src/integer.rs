//! Fixed-width integer conversions
//!
//! Two families per width:
//! - **Exact** (big-endian): input must be exactly `width / 8` bytes.
//! - **Lower** (little-endian): any non-empty input; only the first
//!   `min(len, width / 8)` bytes are used and missing high-order bytes are
//!   zero. Short input is NOT sign-extended, so a partial-width decode is
//!   always non-negative. A full-width decode is a plain two's-complement
//!   reinterpretation, which the float codec relies on.
//!
//! 16-bit values are big-endian only: there is no little-endian 16-bit path.
//! The lenient short decode treats each byte as signed, so any byte with its
//! top bit set floods the bits above it with ones.

use tracing::debug;

use crate::error::{CodecError, Result};

/// Natural byte width of a 16-bit integer
pub const BYTES_16: usize = 2;
/// Natural byte width of a 32-bit integer
pub const BYTES_32: usize = 4;
/// Natural byte width of a 64-bit integer
pub const BYTES_64: usize = 8;

// ============================================================================
// Precondition checks
// ============================================================================

fn require_non_empty(operation: &'static str, bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        debug!(operation, "Rejected empty byte sequence");
        return Err(CodecError::empty(operation));
    }
    Ok(())
}

fn require_exact<const N: usize>(operation: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        debug!(
            operation,
            expected = N,
            actual = bytes.len(),
            "Rejected byte sequence of wrong length"
        );
        CodecError::length_mismatch(operation, N, bytes.len())
    })
}

/// Zero-extending little-endian load of at most `width` bytes
fn load_le(bytes: &[u8], width: usize) -> u64 {
    bytes
        .iter()
        .take(width)
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)))
}

/// Big-endian OR of at most `width` sign-extended bytes
fn load_be_signed(bytes: &[u8], width: usize) -> i32 {
    let used = &bytes[..bytes.len().min(width)];
    used.iter().enumerate().fold(0i32, |acc, (i, &b)| {
        acc | (i32::from(b as i8) << (8 * (used.len() - 1 - i)))
    })
}

// ============================================================================
// 16-bit
// ============================================================================

/// Decode exactly 2 bytes as a big-endian i16
pub fn bytes_to_i16_be(bytes: &[u8]) -> Result<i16> {
    let raw = require_exact::<BYTES_16>("bytes_to_i16_be", bytes)?;
    Ok(i16::from_be_bytes(raw))
}

/// Encode i16 as 2 big-endian bytes
pub fn i16_to_bytes_be(value: i16) -> [u8; BYTES_16] {
    value.to_be_bytes()
}

/// Decode a lenient big-endian short
///
/// Accepts any non-empty input and uses the first `min(len, 2)` bytes,
/// most significant first. Bytes are sign-extended before they are OR-ed
/// together, so `[0x01, 0x80]` is -128 and `[0x00, 0xFF]` is -1. Only when the
/// last used byte is below 0x80 does this agree with `bytes_to_i16_be`.
pub fn bytes_to_short(bytes: &[u8]) -> Result<i16> {
    require_non_empty("bytes_to_short", bytes)?;
    Ok(load_be_signed(bytes, BYTES_16) as i16)
}

/// Encode a short as 2 big-endian bytes
pub fn short_to_bytes(value: i16) -> [u8; BYTES_16] {
    i16_to_bytes_be(value)
}

// ============================================================================
// 32-bit
// ============================================================================

/// Decode exactly 4 bytes as a big-endian i32
pub fn bytes_to_i32_be(bytes: &[u8]) -> Result<i32> {
    let raw = require_exact::<BYTES_32>("bytes_to_i32_be", bytes)?;
    Ok(i32::from_be_bytes(raw))
}

/// Encode i32 as 4 big-endian bytes
pub fn i32_to_bytes_be(value: i32) -> [u8; BYTES_32] {
    value.to_be_bytes()
}

/// Decode up to 4 little-endian bytes as i32, zero-extending short input
///
/// Bytes past the fourth are ignored.
pub fn bytes_to_i32_le(bytes: &[u8]) -> Result<i32> {
    require_non_empty("bytes_to_i32_le", bytes)?;
    Ok(load_le(bytes, BYTES_32) as u32 as i32)
}

/// Encode i32 as 4 little-endian bytes
pub fn i32_to_bytes_le(value: i32) -> [u8; BYTES_32] {
    value.to_le_bytes()
}

// ============================================================================
// 64-bit
// ============================================================================

/// Decode exactly 8 bytes as a big-endian i64
pub fn bytes_to_i64_be(bytes: &[u8]) -> Result<i64> {
    let raw = require_exact::<BYTES_64>("bytes_to_i64_be", bytes)?;
    Ok(i64::from_be_bytes(raw))
}

/// Encode i64 as 8 big-endian bytes
pub fn i64_to_bytes_be(value: i64) -> [u8; BYTES_64] {
    value.to_be_bytes()
}

/// Decode up to 8 little-endian bytes as i64, zero-extending short input
///
/// Bytes past the eighth are ignored.
pub fn bytes_to_i64_le(bytes: &[u8]) -> Result<i64> {
    require_non_empty("bytes_to_i64_le", bytes)?;
    Ok(load_le(bytes, BYTES_64) as i64)
}

/// Encode i64 as 8 little-endian bytes
pub fn i64_to_bytes_le(value: i64) -> [u8; BYTES_64] {
    value.to_le_bytes()
}
