//! Textual byte renderings
//!
//! - Hex: two uppercase digits per byte, no separator. `[0x0A, 0xFF]` → "0AFF"
//! - Bit string: eight binary digits per byte, single-space separated.
//!   `[1, 2]` → "00000001 00000010"
//!
//! Neither rendering fails; empty input renders as an empty string.

use std::fmt::Write;

/// Render bytes as uppercase hex
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Render bytes as space-separated 8-bit binary groups
pub fn bytes_to_bit_string(bytes: &[u8]) -> String {
    let mut result = String::with_capacity((bytes.len() * 9).saturating_sub(1));
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let _ = write!(&mut result, "{:08b}", byte);
    }
    result
}
