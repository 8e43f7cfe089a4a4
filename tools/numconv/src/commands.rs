//! Subcommand implementations
//!
//! Each command returns the text to print so main only handles I/O.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use numcodec::{
    bytes_to_bit_string, bytes_to_f32, bytes_to_f64, bytes_to_hex, bytes_to_i16_be,
    bytes_to_i32_be, bytes_to_i32_le, bytes_to_i64_be, bytes_to_i64_le, bytes_to_short,
    f32_to_bytes, f64_to_bytes, i16_to_bytes_be, i32_to_bytes_be, i32_to_bytes_le,
    i64_to_bytes_be, i64_to_bytes_le, Endianness,
};
use serde::Serialize;
use tracing::debug;

use crate::config::OutputFormat;

/// Numeric kind handled by a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// 16-bit integer (big-endian only)
    I16,
    I32,
    I64,
    /// IEEE-754 binary32 (little-endian only)
    F32,
    /// IEEE-754 binary64 (little-endian only)
    F64,
}

impl Kind {
    /// Pick the byte order for a conversion
    ///
    /// i16 and floats each have a single byte order, so an absent request
    /// resolves to it regardless of the configured default. Only an explicit
    /// request for the other order is an error.
    pub fn resolve_order(
        self,
        requested: Option<Endianness>,
        configured: Endianness,
    ) -> Result<Endianness> {
        let endian = match (self, requested) {
            (_, Some(endian)) => endian,
            (Kind::I16, None) => Endianness::BigEndian,
            (Kind::F32 | Kind::F64, None) => Endianness::LittleEndian,
            (Kind::I32 | Kind::I64, None) => configured,
        };
        self.check_order(endian)?;
        Ok(endian)
    }

    fn check_order(self, endian: Endianness) -> Result<()> {
        match (self, endian) {
            (Kind::I16, Endianness::LittleEndian) => {
                bail!("16-bit conversion is big-endian only")
            },
            (Kind::F32 | Kind::F64, Endianness::BigEndian) => {
                bail!("float conversion is little-endian only (use --endian le)")
            },
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Serialize)]
struct EncodeOutput {
    kind: Kind,
    endian: Endianness,
    hex: String,
    bits: String,
}

#[derive(Debug, Serialize)]
struct DecodeOutput {
    kind: Kind,
    endian: Endianness,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_bits: Option<String>,
}

/// Parse a byte sequence written as hex, e.g. "0x0AFF" or "0a ff"
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = digits.chars().filter(|c| !c.is_whitespace()).collect();

    hex::decode(&compact).with_context(|| format!("Invalid hex byte sequence: {:?}", input))
}

fn hex_digits(input: &str) -> Option<&str> {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
}

/// Parse an integer as decimal, or as a raw bit pattern when `0x`-prefixed
macro_rules! parse_int {
    ($input:expr, $signed:ty, $unsigned:ty) => {{
        let input = $input.trim();
        match hex_digits(input) {
            Some(digits) => <$unsigned>::from_str_radix(digits, 16)
                .map(|bits| bits as $signed)
                .with_context(|| {
                    format!("Invalid {} bit pattern: {}", stringify!($signed), input)
                }),
            None => input
                .parse::<$signed>()
                .with_context(|| format!("Invalid {} value: {}", stringify!($signed), input)),
        }
    }};
}

fn parse_f32(input: &str) -> Result<f32> {
    let input = input.trim();
    match hex_digits(input) {
        Some(digits) => u32::from_str_radix(digits, 16)
            .map(f32::from_bits)
            .with_context(|| format!("Invalid f32 bit pattern: {}", input)),
        None => input
            .parse::<f32>()
            .with_context(|| format!("Invalid f32 value: {}", input)),
    }
}

fn parse_f64(input: &str) -> Result<f64> {
    let input = input.trim();
    match hex_digits(input) {
        Some(digits) => u64::from_str_radix(digits, 16)
            .map(f64::from_bits)
            .with_context(|| format!("Invalid f64 bit pattern: {}", input)),
        None => input
            .parse::<f64>()
            .with_context(|| format!("Invalid f64 value: {}", input)),
    }
}

/// Encode `value` as `kind` and return its bytes
pub fn encode_bytes(kind: Kind, value: &str, endian: Endianness) -> Result<Vec<u8>> {
    kind.check_order(endian)?;

    let bytes = match (kind, endian) {
        (Kind::I16, _) => i16_to_bytes_be(parse_int!(value, i16, u16)?).to_vec(),
        (Kind::I32, Endianness::BigEndian) => {
            i32_to_bytes_be(parse_int!(value, i32, u32)?).to_vec()
        },
        (Kind::I32, Endianness::LittleEndian) => {
            i32_to_bytes_le(parse_int!(value, i32, u32)?).to_vec()
        },
        (Kind::I64, Endianness::BigEndian) => {
            i64_to_bytes_be(parse_int!(value, i64, u64)?).to_vec()
        },
        (Kind::I64, Endianness::LittleEndian) => {
            i64_to_bytes_le(parse_int!(value, i64, u64)?).to_vec()
        },
        (Kind::F32, _) => f32_to_bytes(parse_f32(value)?).to_vec(),
        (Kind::F64, _) => f64_to_bytes(parse_f64(value)?).to_vec(),
    };

    debug!(?kind, %endian, len = bytes.len(), "Encoded value");
    Ok(bytes)
}

/// Render bytes in the requested text format(s)
pub fn render(bytes: &[u8], format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => bytes_to_hex(bytes),
        OutputFormat::Bits => bytes_to_bit_string(bytes),
        OutputFormat::Both => format!("{}\n{}", bytes_to_hex(bytes), bytes_to_bit_string(bytes)),
    }
}

/// `numconv encode`
///
/// `requested` is the `--endian` flag; `configured` is the config default.
pub fn encode(
    kind: Kind,
    value: &str,
    requested: Option<Endianness>,
    configured: Endianness,
    format: OutputFormat,
    json: bool,
) -> Result<String> {
    let endian = kind.resolve_order(requested, configured)?;
    let bytes = encode_bytes(kind, value, endian)?;

    if json {
        let output = EncodeOutput {
            kind,
            endian,
            hex: bytes_to_hex(&bytes),
            bits: bytes_to_bit_string(&bytes),
        };
        return Ok(serde_json::to_string(&output)?);
    }

    Ok(render(&bytes, format))
}

/// `numconv decode`
///
/// Big-endian integers use the exact-width decode; little-endian integers use
/// the lenient zero-extending decode. `i16` uses the lenient short decode
/// unless `exact` is set; `exact` is rejected for every other kind.
pub fn decode(
    kind: Kind,
    input: &str,
    requested: Option<Endianness>,
    configured: Endianness,
    exact: bool,
    json: bool,
) -> Result<String> {
    if exact && kind != Kind::I16 {
        bail!("--exact applies only to i16");
    }
    let endian = kind.resolve_order(requested, configured)?;
    let bytes = parse_hex(input)?;
    debug!(?kind, %endian, len = bytes.len(), "Decoding bytes");

    let (value, raw_bits) = match (kind, endian) {
        (Kind::I16, _) if exact => (bytes_to_i16_be(&bytes)?.to_string(), None),
        (Kind::I16, _) => (bytes_to_short(&bytes)?.to_string(), None),
        (Kind::I32, Endianness::BigEndian) => (bytes_to_i32_be(&bytes)?.to_string(), None),
        (Kind::I32, Endianness::LittleEndian) => (bytes_to_i32_le(&bytes)?.to_string(), None),
        (Kind::I64, Endianness::BigEndian) => (bytes_to_i64_be(&bytes)?.to_string(), None),
        (Kind::I64, Endianness::LittleEndian) => (bytes_to_i64_le(&bytes)?.to_string(), None),
        (Kind::F32, _) => {
            let value = bytes_to_f32(&bytes)?;
            (format!("{:?}", value), Some(format!("{:08X}", value.to_bits())))
        },
        (Kind::F64, _) => {
            let value = bytes_to_f64(&bytes)?;
            (format!("{:?}", value), Some(format!("{:016X}", value.to_bits())))
        },
    };

    if json {
        let output = DecodeOutput {
            kind,
            endian,
            value,
            raw_bits,
        };
        return Ok(serde_json::to_string(&output)?);
    }

    Ok(match raw_bits {
        Some(bits) => format!("{} (bits 0x{})", value, bits),
        None => value,
    })
}
