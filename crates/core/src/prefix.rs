//! Length-prefix kinds
//!
//! A variable-length sequence inside a composite is preceded by its element
//! count, written as one of eight fixed-width integer kinds chosen per field.
//!
//! ## Max Length Table
//!
//! | Kind | Width | Max count |
//! |------|-------|-----------|
//! | int8 | 1 | 127 |
//! | uint8 | 1 | 255 |
//! | int16 | 2 | 32767 |
//! | uint16 | 2 | 65535 |
//! | int32 | 4 | 2^31 - 1 |
//! | uint32 | 4 | 2^32 - 1 |
//! | int64 | 8 | 2^63 - 1 |
//! | uint64 | 8 | 2^64 - 1 |

use crate::scalar::ScalarKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer kind used to write a sequence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixKind {
    /// Signed 8-bit prefix
    Int8,
    /// Unsigned 8-bit prefix
    Uint8,
    /// Signed 16-bit prefix
    Int16,
    /// Unsigned 16-bit prefix
    Uint16,
    /// Signed 32-bit prefix
    Int32,
    /// Unsigned 32-bit prefix
    Uint32,
    /// Signed 64-bit prefix
    Int64,
    /// Unsigned 64-bit prefix
    Uint64,
}

impl PrefixKind {
    /// All prefix kinds (for iteration)
    pub const ALL: [PrefixKind; 8] = [
        PrefixKind::Int8,
        PrefixKind::Uint8,
        PrefixKind::Int16,
        PrefixKind::Uint16,
        PrefixKind::Int32,
        PrefixKind::Uint32,
        PrefixKind::Int64,
        PrefixKind::Uint64,
    ];

    /// Largest element count each kind can carry
    pub const MAX_LENGTH_TABLE: [(PrefixKind, u64); 8] = [
        (PrefixKind::Int8, i8::MAX as u64),
        (PrefixKind::Uint8, u8::MAX as u64),
        (PrefixKind::Int16, i16::MAX as u64),
        (PrefixKind::Uint16, u16::MAX as u64),
        (PrefixKind::Int32, i32::MAX as u64),
        (PrefixKind::Uint32, u32::MAX as u64),
        (PrefixKind::Int64, i64::MAX as u64),
        (PrefixKind::Uint64, u64::MAX),
    ];

    /// Annotation spelling (`int8` ... `uint64`)
    pub const fn name(&self) -> &'static str {
        match self {
            PrefixKind::Int8 => "int8",
            PrefixKind::Uint8 => "uint8",
            PrefixKind::Int16 => "int16",
            PrefixKind::Uint16 => "uint16",
            PrefixKind::Int32 => "int32",
            PrefixKind::Uint32 => "uint32",
            PrefixKind::Int64 => "int64",
            PrefixKind::Uint64 => "uint64",
        }
    }

    /// Parse from annotation spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int8" => Some(PrefixKind::Int8),
            "uint8" => Some(PrefixKind::Uint8),
            "int16" => Some(PrefixKind::Int16),
            "uint16" => Some(PrefixKind::Uint16),
            "int32" => Some(PrefixKind::Int32),
            "uint32" => Some(PrefixKind::Uint32),
            "int64" => Some(PrefixKind::Int64),
            "uint64" => Some(PrefixKind::Uint64),
            _ => None,
        }
    }

    /// Maximum element count, from the max length table
    pub const fn max_len(&self) -> u64 {
        Self::MAX_LENGTH_TABLE[*self as usize].1
    }

    /// Scalar kind the prefix is written as
    pub const fn scalar_kind(&self) -> ScalarKind {
        match self {
            PrefixKind::Int8 => ScalarKind::I8,
            PrefixKind::Uint8 => ScalarKind::U8,
            PrefixKind::Int16 => ScalarKind::I16,
            PrefixKind::Uint16 => ScalarKind::U16,
            PrefixKind::Int32 => ScalarKind::I32,
            PrefixKind::Uint32 => ScalarKind::U32,
            PrefixKind::Int64 => ScalarKind::I64,
            PrefixKind::Uint64 => ScalarKind::U64,
        }
    }

    /// Encoded width in bytes
    pub const fn width(&self) -> usize {
        self.scalar_kind().width()
    }

    /// Whether a count of `len` elements fits this kind
    pub const fn fits(&self, len: usize) -> bool {
        (len as u64) <= self.max_len()
    }
}

impl fmt::Display for PrefixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
