//! numcodec - bit-exact numeric codec
//!
//! Stateless conversions between fixed-width numbers and byte sequences.
//!
//! # Architecture
//!
//! - **Integer**: 16/32/64-bit two's-complement ↔ bytes, big- and little-endian
//! - **Float**: IEEE-754 binary32/binary64 ↔ bytes via their raw bit patterns
//! - **Text**: bytes → uppercase hex or space-separated bit groups
//!
//! Every function is pure and reentrant. Decoders return [`Result`]; encoders
//! and renderers cannot fail.
//!
//! # Example
//!
//! ```rust
//! use numcodec::{bytes_to_hex, bytes_to_i32_le, i32_to_bytes_be};
//!
//! assert_eq!(i32_to_bytes_be(1), [0x00, 0x00, 0x00, 0x01]);
//! assert_eq!(bytes_to_hex(&i32_to_bytes_be(0x0AFF)), "00000AFF");
//!
//! // Short little-endian input is zero-extended, never sign-extended
//! assert_eq!(bytes_to_i32_le(&[0xFF]).unwrap(), 255);
//! ```

pub mod endian;
pub mod error;
pub mod float;
pub mod integer;
pub mod text;

// Re-export core types
pub use endian::Endianness;
pub use error::{CodecError, Result, Violation};

pub use float::{bytes_to_f32, bytes_to_f64, f32_to_bytes, f64_to_bytes};
pub use integer::{
    bytes_to_i16_be, bytes_to_i32_be, bytes_to_i32_le, bytes_to_i64_be, bytes_to_i64_le,
    bytes_to_short, i16_to_bytes_be, i32_to_bytes_be, i32_to_bytes_le, i64_to_bytes_be,
    i64_to_bytes_le, short_to_bytes, BYTES_16, BYTES_32, BYTES_64,
};
pub use text::{bytes_to_bit_string, bytes_to_hex};
