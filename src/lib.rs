//! binpack - Binary packing of nested records
//!
//! binpack encodes fixed-width numbers, byte strings, fixed and variable
//! sequences, and composites of those into a flat byte stream with no
//! framing of its own. Variable-length members declare how their length is
//! written, and any member may override the byte order for itself and
//! everything nested in it.
//!
//! # Quick Start
//!
//! ```
//! use binpack::{ByteOrder, Pack};
//!
//! #[derive(Pack, Debug, Default, PartialEq)]
//! struct Reading {
//!     #[binpack("lenprefix=uint16,endian=little")]
//!     samples: Vec<u16>,
//!     checksum: u32,
//! }
//!
//! let reading = Reading { samples: vec![0x1122, 0x3344], checksum: 0x11223344 };
//! let bytes = binpack::to_vec(ByteOrder::Big, &reading)?;
//! assert_eq!(bytes, [0x02, 0x00, 0x22, 0x11, 0x44, 0x33, 0x11, 0x22, 0x33, 0x44]);
//!
//! let back: Reading = binpack::from_slice(&bytes, ByteOrder::Big)?;
//! assert_eq!(back, reading);
//! # Ok::<(), binpack::Error>(())
//! ```
//!
//! # Annotations
//!
//! `#[binpack("...")]` takes a comma-separated list:
//!
//! - `-` skips the member (so does a name starting with `_`)
//! - `lenprefix=<kind>` with kind one of `int8`, `uint8`, `int16`, `uint16`,
//!   `int32`, `uint32`, `int64`, `uint64`
//! - `endian=big` or `endian=little`
//!
//! # Layouts known at runtime
//!
//! [`encode_value`] and [`decode_value`] walk a [`Value`] tree against a
//! [`Shape`] with the same rules, and produce the same bytes as the typed path.

// Lets the derive's `::binpack::` paths resolve inside this crate too.
extern crate self as binpack;

pub use binpack_core::{
    is_placeholder, ByteOrder, Config, ConfigError, DecodeError, EncodeError, Error,
    FieldAnnotation, FieldShape, Limits, PrefixKind, Result, Scalar, ScalarKind, Shape, ShapeKind,
};

pub use binpack_codec::{
    decode, decode_member, decode_value, decode_with, encode, encode_member, encode_value,
    encode_with, from_slice, to_vec, Member, Pack, Value,
};

pub use binpack_derive::Pack;
