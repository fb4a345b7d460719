//! The `Pack` trait.

use crate::composite::Member;
use binpack_core::{Config, Result, Shape, ShapeKind};
use std::io::{Read, Write};

/// A value the engine can encode and decode.
///
/// Implemented for the ten scalar types, `[T; N]` and `Vec<T>`, and derived
/// for composites with `#[derive(Pack)]`. Each implementation is one case of
/// the traversal: scalars defer to the scalar codec, sequences walk their
/// elements, composites walk their members in declaration order.
///
/// # Members
///
/// When a value sits inside a composite, the composite calls
/// [`encode_field`](Pack::encode_field) / [`decode_field`](Pack::decode_field)
/// with the member's annotation. Only variable-length sequences use it, to
/// write or read their length prefix; every other shape forwards to
/// `encode_value` / `decode_value`.
///
/// # Decoding in place
///
/// Decode overwrites an existing value rather than constructing a new one.
/// A `Vec` member keeps its storage when its capacity suffices.
pub trait Pack {
    /// Shape classification, available at compile time.
    const KIND: ShapeKind;

    /// Set only by `u8`, whose sequences are written as raw bytes.
    #[doc(hidden)]
    const IS_BYTE: bool = false;

    /// Full layout descriptor.
    fn shape() -> Shape;

    /// Encode `self` with no member context.
    fn encode_value<W: Write + ?Sized>(&self, w: &mut W, cfg: Config) -> Result<()>;

    /// Decode into `self` with no member context.
    fn decode_value<R: Read + ?Sized>(&mut self, r: &mut R, cfg: Config) -> Result<()>;

    /// Encode `self` as a composite member.
    ///
    /// `cfg` already carries the member's resolved byte order.
    fn encode_field<W: Write + ?Sized>(&self, w: &mut W, cfg: Config, _member: &Member) -> Result<()> {
        self.encode_value(w, cfg)
    }

    /// Decode into `self` as a composite member.
    fn decode_field<R: Read + ?Sized>(&mut self, r: &mut R, cfg: Config, _member: &Member) -> Result<()> {
        self.decode_value(r, cfg)
    }

    #[doc(hidden)]
    fn encode_slice<W: Write + ?Sized>(items: &[Self], w: &mut W, cfg: Config) -> Result<()>
    where
        Self: Sized,
    {
        for item in items {
            item.encode_value(w, cfg)?;
        }
        Ok(())
    }

    #[doc(hidden)]
    fn decode_slice<R: Read + ?Sized>(items: &mut [Self], r: &mut R, cfg: Config) -> Result<()>
    where
        Self: Sized,
    {
        for item in items {
            item.decode_value(r, cfg)?;
        }
        Ok(())
    }
}
