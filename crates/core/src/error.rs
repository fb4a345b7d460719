//! Error types for binpack
//!
//! Every failure aborts the current encode/decode call and is returned to
//! the caller. Nothing is retried or replaced with a default.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::prefix::PrefixKind;
use std::io;
use thiserror::Error;

/// Result type alias for binpack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by `encode`
pub type EncodeError = Error;

/// Error returned by `decode`
pub type DecodeError = Error;

/// Error types for encoding and decoding
#[derive(Debug, Error)]
pub enum Error {
    /// A variable-length sequence member has no `lenprefix` annotation
    #[error("Missing lenprefix for variable-length field `{field}`")]
    MissingLengthPrefix {
        /// Member name
        field: String,
    },

    /// The declared `lenprefix` kind is not one of the eight integer kinds
    #[error("Unknown lenprefix kind `{kind}` on field `{field}`")]
    UnknownLengthPrefixKind {
        /// Member name
        field: String,
        /// Kind string as written in the annotation
        kind: String,
    },

    /// Sequence element count does not fit the declared prefix kind
    #[error("Field `{field}` has {len} elements, {kind} prefix allows at most {max}")]
    SequenceTooLarge {
        /// Member name
        field: String,
        /// Actual element count
        len: usize,
        /// Declared prefix kind
        kind: PrefixKind,
        /// Maximum count representable by `kind`
        max: u64,
    },

    /// Decode target has less capacity than the decoded element count
    #[error("Field `{field}` decoded {len} elements but the destination holds only {capacity}")]
    InsufficientCapacity {
        /// Member name
        field: String,
        /// Decoded element count
        len: usize,
        /// Capacity of the destination sequence
        capacity: usize,
    },

    /// The value's shape cannot be traversed
    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),

    /// A sequence element is itself an unframed sequence
    #[error("Nested sequence in {0}: wrap the inner sequence in a composite")]
    NestedSequence(String),

    /// A dynamic value does not match its shape descriptor
    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Shape the descriptor requires
        expected: String,
        /// Shape of the value supplied
        found: String,
    },

    /// A signed length prefix decoded to a negative count
    #[error("Invalid length {value} for field `{field}`")]
    InvalidLength {
        /// Member name
        field: String,
        /// Raw prefix value
        value: i64,
    },

    /// A decoded count exceeds the configured limit
    #[error("Field `{field}` length {len} exceeds limit {max}")]
    LimitExceeded {
        /// Member name
        field: String,
        /// Decoded count
        len: u64,
        /// Configured maximum
        max: usize,
    },

    /// A decode buffer for the decoded count could not be reserved
    #[error("Field `{field}` length {len} cannot be allocated")]
    AllocationFailed {
        /// Member name
        field: String,
        /// Decoded count
        len: usize,
    },

    /// Input remained after a complete value was decoded
    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),

    /// The sink failed
    #[error("Write error: {0}")]
    Write(#[source] io::Error),

    /// The source failed
    #[error("Read error: {0}")]
    Read(#[source] io::Error),

    /// The source ended before the requested bytes were available
    #[error("Short read: expected {expected} bytes")]
    ShortRead {
        /// Number of bytes requested
        expected: usize,
    },
}

impl Error {
    /// Wrap a source failure, mapping end-of-input to `ShortRead`.
    pub fn read(e: io::Error, expected: usize) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::ShortRead { expected }
        } else {
            Error::Read(e)
        }
    }

    /// True for failures of the sink or source rather than of the layout.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::Write(_) | Error::Read(_) | Error::ShortRead { .. }
        )
    }

    pub(crate) fn missing_prefix(field: &str) -> Self {
        Error::MissingLengthPrefix {
            field: field.to_string(),
        }
    }
}
