//! Core types for binpack
//!
//! This crate defines the foundational types shared by the codec and the
//! derive macro:
//! - ByteOrder: Ambient and per-field byte order
//! - PrefixKind: The eight length-prefix integer kinds and their max lengths
//! - ScalarKind / Scalar: Fixed-width numbers
//! - FieldAnnotation: Parsed per-member annotation (skip, lenprefix, endian)
//! - Shape: Wire layout descriptor
//! - Config / Limits: Traversal configuration
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod config;
pub mod error;
pub mod limits;
pub mod order;
pub mod prefix;
pub mod scalar;
pub mod shape;

pub use annotation::FieldAnnotation;
pub use config::{Config, ConfigError};
pub use error::{DecodeError, EncodeError, Error, Result};
pub use limits::Limits;
pub use order::ByteOrder;
pub use prefix::PrefixKind;
pub use scalar::{Scalar, ScalarKind};
pub use shape::{is_placeholder, FieldShape, Shape, ShapeKind};
