//! Scalar kinds and values
//!
//! ## The Ten Scalars
//!
//! | Kind | Width | Encoding |
//! |------|-------|----------|
//! | I8, I16, I32, I64 | 1, 2, 4, 8 | two's complement |
//! | U8, U16, U32, U64 | 1, 2, 4, 8 | unsigned |
//! | F32, F64 | 4, 8 | IEEE-754 bit pattern |

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-width scalar kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl ScalarKind {
    /// All scalar kinds (for iteration)
    pub const ALL: [ScalarKind; 10] = [
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U8,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// Encoded width in bytes
    pub const fn width(&self) -> usize {
        match self {
            ScalarKind::I8 | ScalarKind::U8 => 1,
            ScalarKind::I16 | ScalarKind::U16 => 2,
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 => 4,
            ScalarKind::I64 | ScalarKind::U64 | ScalarKind::F64 => 8,
        }
    }

    /// Rust type name
    pub const fn name(&self) -> &'static str {
        match self {
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }

    /// Zero value of this kind
    pub const fn zero(&self) -> Scalar {
        match self {
            ScalarKind::I8 => Scalar::I8(0),
            ScalarKind::I16 => Scalar::I16(0),
            ScalarKind::I32 => Scalar::I32(0),
            ScalarKind::I64 => Scalar::I64(0),
            ScalarKind::U8 => Scalar::U8(0),
            ScalarKind::U16 => Scalar::U16(0),
            ScalarKind::U32 => Scalar::U32(0),
            ScalarKind::U64 => Scalar::U64(0),
            ScalarKind::F32 => Scalar::F32(0.0),
            ScalarKind::F64 => Scalar::F64(0.0),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single scalar value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
}

impl Scalar {
    /// Kind of this value
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
        }
    }
}

macro_rules! scalar_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v)
                }
            }

            impl TryFrom<Scalar> for $ty {
                type Error = Error;

                fn try_from(s: Scalar) -> Result<Self, Error> {
                    match s {
                        Scalar::$variant(v) => Ok(v),
                        other => Err(Error::ShapeMismatch {
                            expected: ScalarKind::$variant.to_string(),
                            found: other.kind().to_string(),
                        }),
                    }
                }
            }
        )*
    };
}

scalar_conversions! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}
