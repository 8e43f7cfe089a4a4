//! End-to-end codec scenarios
//!
//! Concrete wire layouts that downstream framing and signature code depend on.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use numcodec::{
    bytes_to_bit_string, bytes_to_f32, bytes_to_f64, bytes_to_hex, bytes_to_i32_be,
    bytes_to_i32_le, bytes_to_i64_le, bytes_to_short, f32_to_bytes, f64_to_bytes,
    i32_to_bytes_be, i32_to_bytes_le, i64_to_bytes_be, short_to_bytes, CodecError, Violation,
};

// ============================================================================
// Integer layouts
// ============================================================================

#[test]
fn test_int_one_both_orders() {
    assert_eq!(i32_to_bytes_be(1), [0x00, 0x00, 0x00, 0x01]);
    assert_eq!(i32_to_bytes_le(1), [0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn test_int_one_decodes() {
    assert_eq!(bytes_to_i32_be(&[0x00, 0x00, 0x00, 0x01]).unwrap(), 1);
    assert_eq!(bytes_to_i32_le(&[0x01, 0x00, 0x00, 0x00]).unwrap(), 1);
}

#[test]
fn test_short_big_endian_only() {
    assert_eq!(bytes_to_short(&[0x00, 0x01]).unwrap(), 1);
    assert_eq!(short_to_bytes(1), [0x00, 0x01]);
}

#[test]
fn test_exact_decode_three_bytes_fails() {
    let err = bytes_to_i32_be(&[0x00, 0x00, 0x01]).unwrap_err();
    assert_eq!(err, CodecError::length_mismatch("bytes_to_i32_be", 4, 3));
    assert!(err.to_string().contains("expected exactly 4 bytes, got 3"));
}

#[test]
fn test_lower_decode_empty_fails() {
    let err = bytes_to_i32_le(&[]).unwrap_err();
    assert_eq!(err.violation(), Violation::Empty);
}

#[test]
fn test_lower_decode_single_ff_is_not_sign_extended() {
    assert_eq!(bytes_to_i32_le(&[0xFF]).unwrap(), 255);
    assert_ne!(bytes_to_i32_le(&[0xFF]).unwrap(), -1);
}

#[test]
fn test_absent_input_maps_to_empty() {
    let absent: Option<&[u8]> = None;
    let bytes = absent.unwrap_or_default();

    assert!(bytes_to_i64_le(bytes).is_err());
    assert_eq!(bytes_to_hex(bytes), "");
    assert_eq!(bytes_to_bit_string(bytes), "");
}

// ============================================================================
// Float layouts
// ============================================================================

#[test]
fn test_float_one_round_trip() {
    assert_eq!(bytes_to_f32(&f32_to_bytes(1.0)).unwrap(), 1.0);
    assert_eq!(bytes_to_f64(&f64_to_bytes(1.0)).unwrap(), 1.0);
}

#[test]
fn test_float_bytes_match_int_bits() {
    let value = 3.5f32;
    assert_eq!(f32_to_bytes(value), i32_to_bytes_le(value.to_bits() as i32));
}

#[test]
fn test_float_long_input_truncated() {
    let mut bytes = f32_to_bytes(-7.25).to_vec();
    bytes.extend_from_slice(&[0xDE, 0xAD]);
    assert_eq!(bytes_to_f32(&bytes).unwrap(), -7.25);
}

// ============================================================================
// Text renderings
// ============================================================================

#[test]
fn test_hex_rendering() {
    assert_eq!(bytes_to_hex(&[0x0A, 0xFF]), "0AFF");
    assert_eq!(bytes_to_hex(&[]), "");
    assert_eq!(bytes_to_hex(&i64_to_bytes_be(-1)), "FFFFFFFFFFFFFFFF");
}

#[test]
fn test_bit_string_rendering() {
    assert_eq!(bytes_to_bit_string(&[1]), "00000001");
    assert_eq!(bytes_to_bit_string(&[1, 2]), "00000001 00000010");
    assert_eq!(
        bytes_to_bit_string(&short_to_bytes(-2)),
        "11111111 11111110"
    );
}
