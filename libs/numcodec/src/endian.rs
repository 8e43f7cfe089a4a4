//! Byte order selector
//!
//! Conversions never take an `Endianness`: each byte order has its own
//! function. This enum lets consumers (config files, the CLI) pick which one.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Byte order of a multi-byte value
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: [0x78, 0x56, 0x34, 0x12]
///
/// Serializes as `big_endian` / `little_endian`. Deserializing goes through
/// [`Endianness::parse`], so config files accept every spelling the CLI does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endianness {
    /// Most significant byte first (network byte order)
    #[default]
    BigEndian,

    /// Least significant byte first
    LittleEndian,
}

impl Endianness {
    /// Parse from common string spellings
    ///
    /// - "BE", "BIG", "BIG_ENDIAN", "ABCD", "NETWORK" → BigEndian
    /// - "LE", "LITTLE", "LITTLE_ENDIAN", "DCBA" → LittleEndian
    ///
    /// Case-insensitive; `-` is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "BE" | "BIG" | "BIG_ENDIAN" | "BIGENDIAN" | "ABCD" | "NETWORK" => {
                Some(Self::BigEndian)
            },
            "LE" | "LITTLE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" | "DCBA" => {
                Some(Self::LittleEndian)
            },
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
        }
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Endianness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| de::Error::custom(format!("unknown byte order: {}", s)))
    }
}
