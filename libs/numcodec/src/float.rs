//! IEEE-754 float conversions
//!
//! A float's byte encoding is the little-endian encoding of its raw bit
//! pattern. NaN payloads, the signaling bit and the sign of zero all survive a
//! round trip. Decoding goes through the lower-family integer decode, so short
//! input is zero-extended and long input is truncated.

use crate::error::Result;
use crate::integer::{
    bytes_to_i32_le, bytes_to_i64_le, i32_to_bytes_le, i64_to_bytes_le, BYTES_32, BYTES_64,
};

/// Encode the raw bits of an f32 as 4 little-endian bytes
pub fn f32_to_bytes(value: f32) -> [u8; BYTES_32] {
    i32_to_bytes_le(value.to_bits() as i32)
}

/// Decode little-endian bytes into an f32 bit pattern
pub fn bytes_to_f32(bytes: &[u8]) -> Result<f32> {
    let bits = bytes_to_i32_le(bytes)?;
    Ok(f32::from_bits(bits as u32))
}

/// Encode the raw bits of an f64 as 8 little-endian bytes
pub fn f64_to_bytes(value: f64) -> [u8; BYTES_64] {
    i64_to_bytes_le(value.to_bits() as i64)
}

/// Decode little-endian bytes into an f64 bit pattern
pub fn bytes_to_f64(bytes: &[u8]) -> Result<f64> {
    let bits = bytes_to_i64_le(bytes)?;
    Ok(f64::from_bits(bits as u64))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_f32_known_patterns() {
        // 1.0f32 = 0x3F800000
        assert_eq!(f32_to_bytes(1.0), [0x00, 0x00, 0x80, 0x3F]);
        // 25.0f32 = 0x41C80000
        assert_eq!(f32_to_bytes(25.0), [0x00, 0x00, 0xC8, 0x41]);
        assert_eq!(f32_to_bytes(-0.0), [0x00, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_f64_known_patterns() {
        // 1.0f64 = 0x3FF0000000000000
        assert_eq!(
            f64_to_bytes(1.0),
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F]
        );
        assert_eq!(bytes_to_f64(&f64_to_bytes(-2.5)).unwrap(), -2.5);
    }

    #[test]
    fn test_f32_nan_payload_preserved() {
        let payloads = [0x7FC0_0001u32, 0x7F80_0001, 0xFFC1_2345, 0x7FBF_FFFF];

        for bits in payloads {
            let value = f32::from_bits(bits);
            let decoded = bytes_to_f32(&f32_to_bytes(value)).unwrap();
            assert_eq!(decoded.to_bits(), bits, "Failed for bits: {:#010X}", bits);
        }
    }

    #[test]
    fn test_f64_nan_payload_preserved() {
        let bits = 0x7FF0_0000_0000_BEEFu64;
        let decoded = bytes_to_f64(&f64_to_bytes(f64::from_bits(bits))).unwrap();
        assert_eq!(decoded.to_bits(), bits);
    }

    #[test]
    fn test_signed_zero_and_infinity() {
        let neg_zero = bytes_to_f32(&f32_to_bytes(-0.0)).unwrap();
        assert_eq!(neg_zero, 0.0);
        assert!(neg_zero.is_sign_negative());

        assert_eq!(
            bytes_to_f64(&f64_to_bytes(f64::NEG_INFINITY)).unwrap(),
            f64::NEG_INFINITY
        );
        assert_eq!(
            bytes_to_f32(&f32_to_bytes(f32::INFINITY)).unwrap(),
            f32::INFINITY
        );
    }

    #[test]
    fn test_subnormal_round_trip() {
        let tiny = f32::from_bits(1);
        assert_eq!(bytes_to_f32(&f32_to_bytes(tiny)).unwrap().to_bits(), 1);

        let tiny = f64::from_bits(0x000F_FFFF_FFFF_FFFF);
        assert_eq!(
            bytes_to_f64(&f64_to_bytes(tiny)).unwrap().to_bits(),
            0x000F_FFFF_FFFF_FFFF
        );
    }

    #[test]
    fn test_short_input_zero_extends() {
        // Only the low mantissa byte is supplied: smallest subnormals
        assert_eq!(bytes_to_f32(&[0x01]).unwrap().to_bits(), 1);
        assert_eq!(bytes_to_f64(&[0x00, 0x00, 0x80]).unwrap().to_bits(), 0x80_0000);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            bytes_to_f32(&[]).unwrap_err(),
            CodecError::empty("bytes_to_i32_le")
        );
        assert!(bytes_to_f64(&[]).is_err());
    }
}
