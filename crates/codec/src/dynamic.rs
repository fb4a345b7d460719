//! Shape-driven traversal of dynamic values
//!
//! For layouts only known at runtime, a [`Shape`] descriptor and a [`Value`]
//! tree are walked together. This is the same algorithm the `Pack` impls
//! implement statically, and it produces identical bytes for the same
//! layout. Because nothing is checked at compile time here, a value that
//! does not match its shape is a `ShapeMismatch`, and an `Opaque` shape is
//! an `UnsupportedShape`.

use crate::impls::prepare_slot;
use crate::length::{read_length, write_length};
use crate::scalar::{read_bytes, read_scalar, write_bytes, write_scalar};
use binpack_core::{Config, Error, FieldShape, Result, Scalar, ScalarKind, Shape};
use std::io::{Read, Write};

/// A dynamically shaped value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// A single number
    Scalar(Scalar),
    /// Elements of a fixed or variable sequence
    Sequence(Vec<Value>),
    /// Raw bytes; any sequence of `u8` is carried this way
    Bytes(Vec<u8>),
    /// Member values, one per field of the composite shape
    Composite(Vec<Value>),
    /// No value: a skipped member or an untraversable shape
    #[default]
    Absent,
}

impl Value {
    /// The zero value of `shape`.
    ///
    /// Variable sequences start empty, fixed ones hold `len` zero elements.
    pub fn zero(shape: &Shape) -> Value {
        if let Some(bytes) = byte_form(shape) {
            return Value::zero(&bytes);
        }
        match shape {
            Shape::Scalar(kind) => Value::Scalar(kind.zero()),
            Shape::Fixed { len, elem } => {
                Value::Sequence((0..*len).map(|_| Value::zero(elem)).collect())
            }
            Shape::Variable(_) => Value::Sequence(Vec::new()),
            Shape::Bytes(Some(len)) => Value::Bytes(vec![0; *len]),
            Shape::Bytes(None) => Value::Bytes(Vec::new()),
            Shape::Composite(fields) => {
                Value::Composite(fields.iter().map(|f| Value::zero(&f.shape)).collect())
            }
            Shape::Opaque(_) => Value::Absent,
        }
    }

    fn describe(&self) -> String {
        match self {
            Value::Scalar(s) => s.kind().to_string(),
            Value::Sequence(items) => format!("sequence of {}", items.len()),
            Value::Bytes(bytes) => format!("{} bytes", bytes.len()),
            Value::Composite(values) => format!("composite of {}", values.len()),
            Value::Absent => "absent".to_string(),
        }
    }
}

macro_rules! scalar_values {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_values!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

fn mismatch(shape: &Shape, value: &Value) -> Error {
    Error::ShapeMismatch {
        expected: shape.to_string(),
        found: value.describe(),
    }
}

/// Nesting rule for a sequence shape, checked before anything is written for it.
fn check_elements(shape: &Shape, path: &str) -> Result<()> {
    let ok = match shape {
        Shape::Fixed { elem, .. } => elem.kind().nests_in_fixed(),
        Shape::Variable(elem) => elem.kind().nests_in_variable(),
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(Error::NestedSequence(path.to_string()))
    }
}

/// Encode `value` laid out as `shape`.
pub fn encode_value<W: Write + ?Sized>(
    w: &mut W,
    cfg: Config,
    shape: &Shape,
    value: &Value,
) -> Result<()> {
    tracing::trace!(order = %cfg.byte_order, %shape, "encode dynamic value");
    encode_node(w, cfg, shape, value, "value")
}

fn encode_node<W: Write + ?Sized>(
    w: &mut W,
    cfg: Config,
    shape: &Shape,
    value: &Value,
    path: &str,
) -> Result<()> {
    if let Some(bytes) = byte_form(shape) {
        return encode_node(w, cfg, &bytes, value, path);
    }

    match (shape, value) {
        (Shape::Scalar(kind), Value::Scalar(s)) if s.kind() == *kind => {
            write_scalar(w, cfg.byte_order, *s)
        }
        (Shape::Bytes(len), Value::Bytes(bytes)) if len.map_or(true, |n| n == bytes.len()) => {
            write_bytes(w, bytes)
        }
        (Shape::Fixed { len, elem }, Value::Sequence(items)) if items.len() == *len => {
            check_elements(shape, path)?;
            for item in items {
                encode_node(w, cfg, elem, item, path)?;
            }
            Ok(())
        }
        (Shape::Variable(elem), Value::Sequence(items)) => {
            check_elements(shape, path)?;
            for item in items {
                encode_node(w, cfg, elem, item, path)?;
            }
            Ok(())
        }
        (Shape::Composite(fields), Value::Composite(values)) if values.len() == fields.len() => {
            for (field, value) in fields.iter().zip(values) {
                encode_field(w, cfg, field, value)?;
            }
            Ok(())
        }
        (Shape::Opaque(name), _) => Err(Error::UnsupportedShape(name.clone())),
        _ => Err(mismatch(shape, value)),
    }
}

fn encode_field<W: Write + ?Sized>(
    w: &mut W,
    cfg: Config,
    field: &FieldShape,
    value: &Value,
) -> Result<()> {
    if field.is_skipped() {
        return Ok(());
    }

    let cfg = cfg.with_byte_order(field.annotation.resolve_order(cfg.byte_order));
    let normalized = byte_form(&field.shape);
    let shape = normalized.as_ref().unwrap_or(&field.shape);

    if shape.kind().is_variable() {
        let kind = field.annotation.prefix_kind(&field.name)?;
        let len = match (shape, value) {
            (Shape::Variable(_), Value::Sequence(items)) => items.len(),
            (Shape::Bytes(None), Value::Bytes(bytes)) => bytes.len(),
            _ => return Err(mismatch(shape, value)),
        };
        check_elements(shape, &field.name)?;
        write_length(w, cfg.byte_order, kind, len, &field.name)?;
    }

    encode_node(w, cfg, shape, value, &field.name)
}

/// Decode a value laid out as `shape` into `slot`.
///
/// `slot` is updated in place and reused where it already has the right
/// form: composites keep the values of skipped members, and variable
/// sequences keep their storage subject to the same capacity rules as `Vec`
/// members. On error, members decoded before the failure keep their new
/// values and skipped members are untouched.
pub fn decode_value<R: Read + ?Sized>(
    r: &mut R,
    cfg: Config,
    shape: &Shape,
    slot: &mut Value,
) -> Result<()> {
    tracing::trace!(order = %cfg.byte_order, %shape, "decode dynamic value");
    decode_node(r, cfg, shape, slot, "value")
}

fn decode_node<R: Read + ?Sized>(
    r: &mut R,
    cfg: Config,
    shape: &Shape,
    slot: &mut Value,
    path: &str,
) -> Result<()> {
    if let Some(bytes) = byte_form(shape) {
        return decode_node(r, cfg, &bytes, slot, path);
    }

    match shape {
        Shape::Scalar(kind) => {
            *slot = Value::Scalar(read_scalar(r, cfg.byte_order, *kind)?);
        }
        Shape::Bytes(Some(len)) => {
            let mut buf = vec![0u8; *len];
            read_bytes(r, &mut buf)?;
            *slot = Value::Bytes(buf);
        }
        Shape::Bytes(None) => {
            ensure_bytes(slot);
            if let Value::Bytes(buf) = slot {
                read_bytes(r, buf)?;
            }
        }
        Shape::Fixed { len, elem } => {
            check_elements(shape, path)?;
            ensure_sequence(slot);
            if let Value::Sequence(items) = slot {
                items.truncate(*len);
                items.resize_with(*len, Value::default);
                for item in items.iter_mut() {
                    decode_node(r, cfg, elem, item, path)?;
                }
            }
        }
        Shape::Variable(elem) => {
            check_elements(shape, path)?;
            ensure_sequence(slot);
            if let Value::Sequence(items) = slot {
                for item in items.iter_mut() {
                    decode_node(r, cfg, elem, item, path)?;
                }
            }
        }
        Shape::Composite(fields) => {
            if !matches!(slot, Value::Composite(values) if values.len() == fields.len()) {
                *slot = Value::zero(shape);
            }
            if let Value::Composite(values) = slot {
                for (field, value) in fields.iter().zip(values.iter_mut()) {
                    decode_field(r, cfg, field, value)?;
                }
            }
        }
        Shape::Opaque(name) => return Err(Error::UnsupportedShape(name.clone())),
    }
    Ok(())
}

fn decode_field<R: Read + ?Sized>(
    r: &mut R,
    cfg: Config,
    field: &FieldShape,
    slot: &mut Value,
) -> Result<()> {
    if field.is_skipped() {
        return Ok(());
    }

    let cfg = cfg.with_byte_order(field.annotation.resolve_order(cfg.byte_order));
    let normalized = byte_form(&field.shape);
    let shape = normalized.as_ref().unwrap_or(&field.shape);

    match shape {
        Shape::Variable(_) => {
            let kind = field.annotation.prefix_kind(&field.name)?;
            check_elements(shape, &field.name)?;
            let len = read_length(r, cfg.byte_order, kind, &field.name)?;
            ensure_sequence(slot);
            if let Value::Sequence(items) = slot {
                prepare_slot(items, len, &field.name, &cfg.limits)?;
            }
        }
        Shape::Bytes(None) => {
            let kind = field.annotation.prefix_kind(&field.name)?;
            let len = read_length(r, cfg.byte_order, kind, &field.name)?;
            ensure_bytes(slot);
            if let Value::Bytes(buf) = slot {
                prepare_slot(buf, len, &field.name, &cfg.limits)?;
            }
        }
        _ => {}
    }

    decode_node(r, cfg, shape, slot, &field.name)
}

/// Sequences of `u8` are raw bytes however the shape was built.
fn byte_form(shape: &Shape) -> Option<Shape> {
    match shape {
        Shape::Variable(elem) if matches!(**elem, Shape::Scalar(ScalarKind::U8)) => {
            Some(Shape::Bytes(None))
        }
        Shape::Fixed { len, elem } if matches!(**elem, Shape::Scalar(ScalarKind::U8)) => {
            Some(Shape::Bytes(Some(*len)))
        }
        _ => None,
    }
}

fn ensure_sequence(slot: &mut Value) {
    if !matches!(slot, Value::Sequence(_)) {
        *slot = Value::Sequence(Vec::new());
    }
}

fn ensure_bytes(slot: &mut Value) {
    if !matches!(slot, Value::Bytes(_)) {
        *slot = Value::Bytes(Vec::new());
    }
}
