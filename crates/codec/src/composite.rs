//! Composite members
//!
//! A composite is the concatenation of its members in declaration order,
//! with no padding, separators, or framing of its own. Derived and
//! hand-written `Pack` impls both go through [`encode_member`] and
//! [`decode_member`], which apply the member's annotation:
//!
//! 1. skipped and placeholder members contribute nothing and are left
//!    untouched on decode;
//! 2. the member's byte order override replaces the ambient order for the
//!    member and everything nested in it;
//! 3. the value itself decides whether a length prefix is needed.
//!
//! # Example
//!
//! ```
//! use binpack_codec::{encode_member, decode_member, Member, Pack};
//! use binpack_core::{Config, FieldAnnotation, PrefixKind, Result, Shape, ShapeKind};
//! use std::io::{Read, Write};
//!
//! #[derive(Default)]
//! struct Reading {
//!     samples: Vec<u16>,
//! }
//!
//! const SAMPLES: Member = Member::new("samples", FieldAnnotation::with_prefix(PrefixKind::Uint8));
//!
//! impl Pack for Reading {
//!     const KIND: ShapeKind = ShapeKind::Composite;
//!
//!     fn shape() -> Shape {
//!         Shape::Composite(vec![SAMPLES.shape::<Vec<u16>>()])
//!     }
//!
//!     fn encode_value<W: Write + ?Sized>(&self, w: &mut W, cfg: Config) -> Result<()> {
//!         encode_member(&self.samples, w, cfg, &SAMPLES)
//!     }
//!
//!     fn decode_value<R: Read + ?Sized>(&mut self, r: &mut R, cfg: Config) -> Result<()> {
//!         decode_member(&mut self.samples, r, cfg, &SAMPLES)
//!     }
//! }
//! ```

use crate::traits::Pack;
use binpack_core::{is_placeholder, Config, FieldAnnotation, FieldShape, Result};
use std::io::{Read, Write};

/// Static description of one composite member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Member name (`0`, `1`, ... for tuple structs)
    pub name: &'static str,
    /// Parsed annotation
    pub annotation: FieldAnnotation,
}

impl Member {
    /// Create a member description.
    pub const fn new(name: &'static str, annotation: FieldAnnotation) -> Self {
        Member { name, annotation }
    }

    /// Excluded from the wire, by annotation or by placeholder name.
    pub fn is_skipped(&self) -> bool {
        self.annotation.skip || is_placeholder(self.name)
    }

    /// Configuration for the member's subtree.
    pub fn config_for(&self, cfg: Config) -> Config {
        cfg.with_byte_order(self.annotation.resolve_order(cfg.byte_order))
    }

    /// Shape entry for a member of type `T`.
    pub fn shape<T: Pack>(&self) -> FieldShape {
        FieldShape::new(self.name, self.annotation.clone(), T::shape())
    }
}

/// Encode one composite member.
pub fn encode_member<T, W>(value: &T, w: &mut W, cfg: Config, member: &Member) -> Result<()>
where
    T: Pack,
    W: Write + ?Sized,
{
    if member.is_skipped() {
        return Ok(());
    }
    value.encode_field(w, member.config_for(cfg), member)
}

/// Decode one composite member in place.
pub fn decode_member<T, R>(value: &mut T, r: &mut R, cfg: Config, member: &Member) -> Result<()>
where
    T: Pack,
    R: Read + ?Sized,
{
    if member.is_skipped() {
        return Ok(());
    }
    value.decode_field(r, member.config_for(cfg), member)
}
