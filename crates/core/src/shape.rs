//! Value shapes
//!
//! A `Shape` describes how a value is laid out on the wire. It is a closed
//! set: every traversal matches on it exhaustively.
//!
//! ## Nesting rule
//!
//! Only composite members carry a length prefix. A sequence element that is
//! itself a variable-length sequence could never be framed, so it is
//! rejected; wrap the inner sequence in a one-member composite instead.
//! Elements of a variable sequence may not be non-byte fixed sequences
//! either.

use crate::annotation::FieldAnnotation;
use crate::error::{Error, Result};
use crate::scalar::ScalarKind;
use std::borrow::Cow;
use std::fmt;

/// Fieldless classification of a `Shape`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Fixed-width number
    Scalar,
    /// Array of statically known length
    FixedSequence,
    /// Sequence whose length is part of the stream
    VariableSequence,
    /// Raw bytes of statically known length
    FixedBytes,
    /// Raw bytes whose length is part of the stream
    VariableBytes,
    /// Ordered named members
    Composite,
    /// Anything the engine cannot traverse
    Opaque,
}

impl ShapeKind {
    /// Needs a length prefix when it is a composite member
    pub const fn is_variable(self) -> bool {
        matches!(self, ShapeKind::VariableSequence | ShapeKind::VariableBytes)
    }

    /// May be the element of a variable sequence
    pub const fn nests_in_variable(self) -> bool {
        !matches!(
            self,
            ShapeKind::VariableSequence | ShapeKind::VariableBytes | ShapeKind::FixedSequence
        )
    }

    /// May be the element of a fixed sequence
    pub const fn nests_in_fixed(self) -> bool {
        !self.is_variable()
    }
}

/// Wire layout descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A single fixed-width number
    Scalar(ScalarKind),
    /// `len` elements, count never written
    Fixed {
        /// Element count
        len: usize,
        /// Element shape
        elem: Box<Shape>,
    },
    /// Elements preceded by a length prefix when used as a member
    Variable(Box<Shape>),
    /// Contiguous raw bytes; `Some(n)` when the length is static
    Bytes(Option<usize>),
    /// Members in wire order
    Composite(Vec<FieldShape>),
    /// A type the engine does not know how to traverse
    Opaque(String),
}

impl Shape {
    /// Fixed sequence; byte elements become `Bytes(Some(len))`
    pub fn fixed(len: usize, elem: Shape) -> Self {
        match elem {
            Shape::Scalar(ScalarKind::U8) => Shape::Bytes(Some(len)),
            elem => Shape::Fixed {
                len,
                elem: Box::new(elem),
            },
        }
    }

    /// Variable sequence; byte elements become `Bytes(None)`
    pub fn variable(elem: Shape) -> Self {
        match elem {
            Shape::Scalar(ScalarKind::U8) => Shape::Bytes(None),
            elem => Shape::Variable(Box::new(elem)),
        }
    }

    /// Classification
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Scalar(_) => ShapeKind::Scalar,
            Shape::Fixed { .. } => ShapeKind::FixedSequence,
            Shape::Variable(_) => ShapeKind::VariableSequence,
            Shape::Bytes(Some(_)) => ShapeKind::FixedBytes,
            Shape::Bytes(None) => ShapeKind::VariableBytes,
            Shape::Composite(_) => ShapeKind::Composite,
            Shape::Opaque(_) => ShapeKind::Opaque,
        }
    }

    /// Check the whole descriptor up front.
    ///
    /// Reports what a traversal would otherwise hit part-way through:
    /// nested sequences, opaque shapes, and variable members with a missing
    /// or unknown `lenprefix`. Skipped members are not inspected.
    pub fn validate(&self) -> Result<()> {
        self.validate_at("value")
    }

    fn validate_at(&self, path: &str) -> Result<()> {
        match self {
            Shape::Scalar(_) | Shape::Bytes(_) => Ok(()),
            Shape::Fixed { elem, .. } => {
                if !elem.kind().nests_in_fixed() {
                    return Err(Error::NestedSequence(path.to_string()));
                }
                elem.validate_at(&format!("{}[]", path))
            }
            Shape::Variable(elem) => {
                if !elem.kind().nests_in_variable() {
                    return Err(Error::NestedSequence(path.to_string()));
                }
                elem.validate_at(&format!("{}[]", path))
            }
            Shape::Composite(fields) => {
                for field in fields.iter().filter(|f| !f.is_skipped()) {
                    if field.shape.kind().is_variable() {
                        field.annotation.prefix_kind(&field.name)?;
                    }
                    field
                        .shape
                        .validate_at(&format!("{}.{}", path, field.name))?;
                }
                Ok(())
            }
            Shape::Opaque(name) => Err(Error::UnsupportedShape(name.clone())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(kind) => write!(f, "{}", kind),
            Shape::Fixed { len, elem } => write!(f, "[{}; {}]", elem, len),
            Shape::Variable(elem) => write!(f, "[{}]", elem),
            Shape::Bytes(Some(len)) => write!(f, "bytes[{}]", len),
            Shape::Bytes(None) => f.write_str("bytes"),
            Shape::Composite(fields) => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.shape)?;
                }
                f.write_str("}")
            }
            Shape::Opaque(name) => f.write_str(name),
        }
    }
}

/// One member of a composite shape
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    /// Member name
    pub name: Cow<'static, str>,
    /// Parsed annotation
    pub annotation: FieldAnnotation,
    /// Member layout
    pub shape: Shape,
}

impl FieldShape {
    /// Member with an already parsed annotation
    pub fn new(name: impl Into<Cow<'static, str>>, annotation: FieldAnnotation, shape: Shape) -> Self {
        FieldShape {
            name: name.into(),
            annotation,
            shape,
        }
    }

    /// Member with an annotation string
    pub fn parse(name: impl Into<Cow<'static, str>>, annotation: &str, shape: Shape) -> Self {
        Self::new(name, FieldAnnotation::parse(annotation), shape)
    }

    /// Excluded from the wire
    pub fn is_skipped(&self) -> bool {
        self.annotation.skip || is_placeholder(&self.name)
    }
}

/// Whether a member name marks a discarded slot (`_`, `_pad`, ...)
pub fn is_placeholder(name: &str) -> bool {
    name.starts_with('_')
}
