//! `Pack` for scalars, arrays and vectors.

use crate::composite::Member;
use crate::length::{read_length, write_length};
use crate::scalar::{read_bytes, read_scalar, write_bytes, write_scalar};
use crate::traits::Pack;
use binpack_core::{Config, Error, Limits, Result, Scalar, ScalarKind, Shape, ShapeKind};
use std::io::{Read, Write};
use std::marker::PhantomData;

macro_rules! impl_pack_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Pack for $ty {
                const KIND: ShapeKind = ShapeKind::Scalar;

                fn shape() -> Shape {
                    Shape::Scalar(ScalarKind::$kind)
                }

                fn encode_value<W: Write + ?Sized>(&self, w: &mut W, cfg: Config) -> Result<()> {
                    write_scalar(w, cfg.byte_order, Scalar::from(*self))
                }

                fn decode_value<R: Read + ?Sized>(&mut self, r: &mut R, cfg: Config) -> Result<()> {
                    *self = <$ty>::try_from(read_scalar(r, cfg.byte_order, ScalarKind::$kind)?)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_pack_scalar! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl Pack for u8 {
    const KIND: ShapeKind = ShapeKind::Scalar;
    const IS_BYTE: bool = true;

    fn shape() -> Shape {
        Shape::Scalar(ScalarKind::U8)
    }

    fn encode_value<W: Write + ?Sized>(&self, w: &mut W, _cfg: Config) -> Result<()> {
        write_bytes(w, &[*self])
    }

    fn decode_value<R: Read + ?Sized>(&mut self, r: &mut R, _cfg: Config) -> Result<()> {
        read_bytes(r, std::slice::from_mut(self))
    }

    fn encode_slice<W: Write + ?Sized>(items: &[u8], w: &mut W, _cfg: Config) -> Result<()> {
        write_bytes(w, items)
    }

    fn decode_slice<R: Read + ?Sized>(items: &mut [u8], r: &mut R, _cfg: Config) -> Result<()> {
        read_bytes(r, items)
    }
}

/// Compile-time nesting checks, evaluated when a sequence impl is used.
struct ElementCheck<T>(PhantomData<T>);

impl<T: Pack> ElementCheck<T> {
    const IN_VARIABLE: () = assert!(
        T::KIND.nests_in_variable(),
        "a Vec element cannot be a sequence; wrap the inner sequence in a composite"
    );

    const IN_FIXED: () = assert!(
        T::KIND.nests_in_fixed(),
        "an array element cannot be a Vec; wrap the inner sequence in a composite"
    );
}

impl<T: Pack, const N: usize> Pack for [T; N] {
    const KIND: ShapeKind = if T::IS_BYTE {
        ShapeKind::FixedBytes
    } else {
        ShapeKind::FixedSequence
    };

    fn shape() -> Shape {
        Shape::fixed(N, T::shape())
    }

    fn encode_value<W: Write + ?Sized>(&self, w: &mut W, cfg: Config) -> Result<()> {
        let () = ElementCheck::<T>::IN_FIXED;
        T::encode_slice(self, w, cfg)
    }

    fn decode_value<R: Read + ?Sized>(&mut self, r: &mut R, cfg: Config) -> Result<()> {
        let () = ElementCheck::<T>::IN_FIXED;
        T::decode_slice(self, r, cfg)
    }
}

/// A bare `Vec` has no length prefix: encode writes its elements and decode
/// fills its current length. As a composite member it is framed by the
/// member's `lenprefix`.
impl<T: Pack + Default> Pack for Vec<T> {
    const KIND: ShapeKind = if T::IS_BYTE {
        ShapeKind::VariableBytes
    } else {
        ShapeKind::VariableSequence
    };

    fn shape() -> Shape {
        Shape::variable(T::shape())
    }

    fn encode_value<W: Write + ?Sized>(&self, w: &mut W, cfg: Config) -> Result<()> {
        let () = ElementCheck::<T>::IN_VARIABLE;
        T::encode_slice(self, w, cfg)
    }

    fn decode_value<R: Read + ?Sized>(&mut self, r: &mut R, cfg: Config) -> Result<()> {
        let () = ElementCheck::<T>::IN_VARIABLE;
        T::decode_slice(self, r, cfg)
    }

    fn encode_field<W: Write + ?Sized>(&self, w: &mut W, cfg: Config, member: &Member) -> Result<()> {
        let () = ElementCheck::<T>::IN_VARIABLE;
        let kind = member.annotation.prefix_kind(member.name)?;
        write_length(w, cfg.byte_order, kind, self.len(), member.name)?;
        T::encode_slice(self, w, cfg)
    }

    fn decode_field<R: Read + ?Sized>(&mut self, r: &mut R, cfg: Config, member: &Member) -> Result<()> {
        let () = ElementCheck::<T>::IN_VARIABLE;
        let kind = member.annotation.prefix_kind(member.name)?;
        let len = read_length(r, cfg.byte_order, kind, member.name)?;
        prepare_slot(self, len, member.name, &cfg.limits)?;
        T::decode_slice(self, r, cfg)
    }
}

/// Size `slot` to `len` elements.
///
/// An unallocated slot gets a new buffer of `len`, subject to `limits`; an
/// allocated one is reused when its capacity suffices and is never grown.
pub(crate) fn prepare_slot<T: Default>(
    slot: &mut Vec<T>,
    len: usize,
    field: &str,
    limits: &Limits,
) -> Result<()> {
    let capacity = slot.capacity();
    if capacity == 0 {
        limits.validate_sequence_len(field, len as u64)?;
        if len > 0 {
            tracing::debug!(field, len, "allocating decode buffer");
        }
        let mut fresh = Vec::new();
        fresh
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed {
                field: field.to_string(),
                len,
            })?;
        *slot = fresh;
    } else if capacity < len {
        return Err(Error::InsufficientCapacity {
            field: field.to_string(),
            len,
            capacity,
        });
    }

    slot.truncate(len);
    slot.resize_with(len, T::default);
    Ok(())
}
