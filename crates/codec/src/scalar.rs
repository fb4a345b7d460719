//! Scalar codec
//!
//! Fixed-width integers are written two's complement at their exact width.
//! Floats are written as the bit pattern of the unsigned integer of the same
//! width, so the stream holds nothing host-specific beyond IEEE-754.

use binpack_core::{ByteOrder, Error, Result, Scalar, ScalarKind};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Write one scalar in `order`.
pub fn write_scalar<W: Write + ?Sized>(w: &mut W, order: ByteOrder, value: Scalar) -> Result<()> {
    match order {
        ByteOrder::Big => write_as::<BigEndian, W>(w, value),
        ByteOrder::Little => write_as::<LittleEndian, W>(w, value),
    }
    .map_err(Error::Write)
}

/// Read one scalar of `kind` in `order`.
pub fn read_scalar<R: Read + ?Sized>(r: &mut R, order: ByteOrder, kind: ScalarKind) -> Result<Scalar> {
    match order {
        ByteOrder::Big => read_as::<BigEndian, R>(r, kind),
        ByteOrder::Little => read_as::<LittleEndian, R>(r, kind),
    }
    .map_err(|e| Error::read(e, kind.width()))
}

fn write_as<B: byteorder::ByteOrder, W: Write + ?Sized>(w: &mut W, value: Scalar) -> io::Result<()> {
    match value {
        Scalar::I8(v) => w.write_i8(v),
        Scalar::I16(v) => w.write_i16::<B>(v),
        Scalar::I32(v) => w.write_i32::<B>(v),
        Scalar::I64(v) => w.write_i64::<B>(v),
        Scalar::U8(v) => w.write_u8(v),
        Scalar::U16(v) => w.write_u16::<B>(v),
        Scalar::U32(v) => w.write_u32::<B>(v),
        Scalar::U64(v) => w.write_u64::<B>(v),
        Scalar::F32(v) => w.write_u32::<B>(v.to_bits()),
        Scalar::F64(v) => w.write_u64::<B>(v.to_bits()),
    }
}

fn read_as<B: byteorder::ByteOrder, R: Read + ?Sized>(r: &mut R, kind: ScalarKind) -> io::Result<Scalar> {
    Ok(match kind {
        ScalarKind::I8 => Scalar::I8(r.read_i8()?),
        ScalarKind::I16 => Scalar::I16(r.read_i16::<B>()?),
        ScalarKind::I32 => Scalar::I32(r.read_i32::<B>()?),
        ScalarKind::I64 => Scalar::I64(r.read_i64::<B>()?),
        ScalarKind::U8 => Scalar::U8(r.read_u8()?),
        ScalarKind::U16 => Scalar::U16(r.read_u16::<B>()?),
        ScalarKind::U32 => Scalar::U32(r.read_u32::<B>()?),
        ScalarKind::U64 => Scalar::U64(r.read_u64::<B>()?),
        ScalarKind::F32 => Scalar::F32(f32::from_bits(r.read_u32::<B>()?)),
        ScalarKind::F64 => Scalar::F64(f64::from_bits(r.read_u64::<B>()?)),
    })
}

/// Write raw bytes in one call.
pub fn write_bytes<W: Write + ?Sized>(w: &mut W, bytes: &[u8]) -> Result<()> {
    w.write_all(bytes).map_err(Error::Write)
}

/// Fill `buf` from the source in one call.
pub fn read_bytes<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> Result<()> {
    r.read_exact(buf).map_err(|e| Error::read(e, buf.len()))
}
