//! Decode limits
//!
//! A length prefix read from the wire decides how much memory decode
//! allocates when the destination has no storage yet. These limits cap that
//! before the allocation happens; a destination that already has the
//! capacity is reused without consulting them. Violations result in
//! `LimitExceeded` errors.
//!
//! The default is unlimited so every encodable value decodes. Callers
//! reading untrusted input set a cap through `Config::with_limits`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Size limits applied while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum element count decode will allocate for (default: unlimited)
    pub max_sequence_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits::unlimited()
    }
}

impl Limits {
    /// No cap beyond what the prefix kind and `usize` can express
    pub const fn unlimited() -> Self {
        Limits {
            max_sequence_len: usize::MAX,
        }
    }

    /// A 16M element cap, suited to untrusted input
    pub const fn untrusted() -> Self {
        Limits {
            max_sequence_len: 16 * 1024 * 1024,
        }
    }

    /// Create limits with small values for testing
    pub const fn with_small_limits() -> Self {
        Limits {
            max_sequence_len: 100,
        }
    }

    /// Validate a decoded length for `field`
    ///
    /// Returns the length as `usize` if it is within the limit.
    pub fn validate_sequence_len(&self, field: &str, len: u64) -> Result<usize> {
        match usize::try_from(len) {
            Ok(n) if n <= self.max_sequence_len => Ok(n),
            _ => Err(Error::LimitExceeded {
                field: field.to_string(),
                len,
                max: self.max_sequence_len,
            }),
        }
    }
}
