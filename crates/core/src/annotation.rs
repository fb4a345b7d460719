//! Per-field annotations
//!
//! A composite member carries a comma-separated annotation string:
//!
//! ```text
//! -                      skip the member entirely
//! lenprefix=<kind>       write the sequence length as <kind> (int8 ... uint64)
//! endian=little|big      byte order for this member and its descendants
//! ```
//!
//! Parsing never fails. Unknown tokens are ignored, and the `lenprefix` kind
//! is only checked when a length prefix is actually needed.

use crate::error::{Error, Result};
use crate::order::ByteOrder;
use crate::prefix::PrefixKind;
use std::borrow::Cow;

const SKIP_TOKEN: &str = "-";
const LENPREFIX_KEY: &str = "lenprefix=";
const ENDIAN_KEY: &str = "endian=";

/// Parsed member annotation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAnnotation {
    /// Exclude the member from encode and decode
    pub skip: bool,
    /// Declared length-prefix kind, verbatim
    pub length_prefix: Option<Cow<'static, str>>,
    /// Byte order override for the member and its descendants
    pub byte_order: Option<ByteOrder>,
}

impl FieldAnnotation {
    /// Annotation with every option unset
    pub const EMPTY: FieldAnnotation = FieldAnnotation {
        skip: false,
        length_prefix: None,
        byte_order: None,
    };

    /// Parse an annotation string.
    pub fn parse(raw: &str) -> Self {
        let mut annotation = FieldAnnotation::default();

        for token in raw.split(',').map(str::trim) {
            if token == SKIP_TOKEN {
                annotation.skip = true;
            } else if let Some(kind) = token.strip_prefix(LENPREFIX_KEY) {
                annotation.length_prefix = Some(Cow::Owned(kind.to_string()));
            } else if let Some(order) = token.strip_prefix(ENDIAN_KEY) {
                if let Some(order) = ByteOrder::from_name(order) {
                    annotation.byte_order = Some(order);
                }
            }
        }

        annotation
    }

    /// Annotation declaring only a length prefix
    pub const fn with_prefix(kind: PrefixKind) -> Self {
        FieldAnnotation {
            skip: false,
            length_prefix: Some(Cow::Borrowed(kind.name())),
            byte_order: None,
        }
    }

    /// Set the byte order override (builder pattern).
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = Some(order);
        self
    }

    /// Byte order for the annotated member given the order of its parent.
    pub fn resolve_order(&self, ambient: ByteOrder) -> ByteOrder {
        self.byte_order.unwrap_or(ambient)
    }

    /// Resolve the declared length-prefix kind for `field`.
    ///
    /// Fails with `MissingLengthPrefix` when none is declared and
    /// `UnknownLengthPrefixKind` when the kind is not one of the eight.
    pub fn prefix_kind(&self, field: &str) -> Result<PrefixKind> {
        let raw = match self.length_prefix.as_deref() {
            None | Some("") => return Err(Error::missing_prefix(field)),
            Some(raw) => raw,
        };

        PrefixKind::from_name(raw).ok_or_else(|| Error::UnknownLengthPrefixKind {
            field: field.to_string(),
            kind: raw.to_string(),
        })
    }
}
