//! Traversal engine for binpack
//!
//! This crate turns values into bytes and back:
//! - scalar: Fixed-width numbers in a chosen byte order
//! - length: Length-prefix framing for variable sequences
//! - traits: The `Pack` trait, one traversal case per shape
//! - impls: `Pack` for scalars, byte sequences, arrays and `Vec`
//! - composite: Member helpers used by derived and hand-written composites
//! - dynamic: The same traversal over a runtime `Shape` and `Value`
//!
//! Encoding is a single pass with no buffering of its own. On error the
//! bytes already written stay written; callers that need all-or-nothing
//! output should encode into a `Vec` first (see [`to_vec`]).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod composite;
pub mod dynamic;
pub mod impls;
pub mod length;
pub mod scalar;
pub mod traits;


pub use composite::{decode_member, encode_member, Member};
pub use dynamic::{decode_value, encode_value, Value};
pub use traits::Pack;

use binpack_core::{ByteOrder, Config, DecodeError, EncodeError, Error};
use std::io::{Cursor, Read, Write};

/// Encode `value` into `w` with `order` as the ambient byte order.
pub fn encode<T, W>(w: &mut W, order: ByteOrder, value: &T) -> Result<(), EncodeError>
where
    T: Pack + ?Sized,
    W: Write + ?Sized,
{
    encode_with(w, Config::new(order), value)
}

/// Decode from `r` into `value` with `order` as the ambient byte order.
///
/// `value` is overwritten in place. Skipped members keep what they held.
pub fn decode<T, R>(r: &mut R, order: ByteOrder, value: &mut T) -> Result<(), DecodeError>
where
    T: Pack + ?Sized,
    R: Read + ?Sized,
{
    decode_with(r, Config::new(order), value)
}

/// Encode with an explicit configuration.
pub fn encode_with<T, W>(w: &mut W, cfg: Config, value: &T) -> Result<(), EncodeError>
where
    T: Pack + ?Sized,
    W: Write + ?Sized,
{
    tracing::trace!(order = %cfg.byte_order, kind = ?T::KIND, "encode");
    value.encode_value(w, cfg)
}

/// Decode with an explicit configuration.
pub fn decode_with<T, R>(r: &mut R, cfg: Config, value: &mut T) -> Result<(), DecodeError>
where
    T: Pack + ?Sized,
    R: Read + ?Sized,
{
    tracing::trace!(order = %cfg.byte_order, kind = ?T::KIND, "decode");
    value.decode_value(r, cfg)
}

/// Encode `value` into a fresh buffer.
pub fn to_vec<T: Pack + ?Sized>(order: ByteOrder, value: &T) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode(&mut buf, order, value)?;
    Ok(buf)
}

/// Decode a `T` that must consume `bytes` exactly.
///
/// The value starts from `T::default()`, so `Vec` members allocate.
pub fn from_slice<T: Pack + Default>(bytes: &[u8], order: ByteOrder) -> Result<T, DecodeError> {
    let mut cursor = Cursor::new(bytes);
    let mut value = T::default();
    decode(&mut cursor, order, &mut value)?;

    let remaining = bytes.len() - cursor.position() as usize;
    if remaining > 0 {
        return Err(Error::TrailingBytes(remaining));
    }
    Ok(value)
}
