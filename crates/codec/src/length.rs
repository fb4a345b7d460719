//! Length-prefix framing
//!
//! ```text
//! [count: <kind>, member byte order][element 0]...[element count-1]
//! ```
//!
//! The count is checked against the kind's maximum before anything is
//! written, so an oversized sequence leaves no partial prefix behind.
//! Reading only validates the count itself; allocation limits are applied
//! where decode sizes its destination.

use crate::scalar::{read_scalar, write_scalar};
use binpack_core::{ByteOrder, Error, PrefixKind, Result, Scalar};
use std::io::{Read, Write};

/// Write `len` as a prefix of `kind`.
pub fn write_length<W: Write + ?Sized>(
    w: &mut W,
    order: ByteOrder,
    kind: PrefixKind,
    len: usize,
    field: &str,
) -> Result<()> {
    if !kind.fits(len) {
        return Err(Error::SequenceTooLarge {
            field: field.to_string(),
            len,
            kind,
            max: kind.max_len(),
        });
    }

    // Fits was checked above, so none of these casts truncate.
    let prefix = match kind {
        PrefixKind::Int8 => Scalar::I8(len as i8),
        PrefixKind::Uint8 => Scalar::U8(len as u8),
        PrefixKind::Int16 => Scalar::I16(len as i16),
        PrefixKind::Uint16 => Scalar::U16(len as u16),
        PrefixKind::Int32 => Scalar::I32(len as i32),
        PrefixKind::Uint32 => Scalar::U32(len as u32),
        PrefixKind::Int64 => Scalar::I64(len as i64),
        PrefixKind::Uint64 => Scalar::U64(len as u64),
    };

    tracing::trace!(field, %kind, len, "write length prefix");
    write_scalar(w, order, prefix)
}

/// Read a prefix of `kind` and validate it as an element count.
pub fn read_length<R: Read + ?Sized>(
    r: &mut R,
    order: ByteOrder,
    kind: PrefixKind,
    field: &str,
) -> Result<usize> {
    let raw = match read_scalar(r, order, kind.scalar_kind())? {
        Scalar::I8(v) => v as i64,
        Scalar::I16(v) => v as i64,
        Scalar::I32(v) => v as i64,
        Scalar::I64(v) => v,
        Scalar::U8(v) => v as i64,
        Scalar::U16(v) => v as i64,
        Scalar::U32(v) => v as i64,
        Scalar::U64(v) => return count(field, v),
        other => {
            return Err(Error::ShapeMismatch {
                expected: kind.to_string(),
                found: other.kind().to_string(),
            })
        }
    };

    if raw < 0 {
        return Err(Error::InvalidLength {
            field: field.to_string(),
            value: raw,
        });
    }

    tracing::trace!(field, %kind, len = raw, "read length prefix");
    count(field, raw as u64)
}

fn count(field: &str, len: u64) -> Result<usize> {
    usize::try_from(len).map_err(|_| Error::LimitExceeded {
        field: field.to_string(),
        len,
        max: usize::MAX,
    })
}
