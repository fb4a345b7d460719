//! Byte order of multi-byte scalars.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The byte order used to serialize multi-byte scalars
///
/// A call starts with one ambient order; a composite member may override it
/// for itself and everything nested inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most-significant byte first
    Big,
    /// Least-significant byte first
    Little,
}

impl ByteOrder {
    /// Network byte order
    pub const NETWORK: ByteOrder = ByteOrder::Big;

    /// The byte order of the target architecture.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        let order = ByteOrder::Big;

        #[cfg(target_endian = "little")]
        let order = ByteOrder::Little;

        order
    }

    /// Annotation spelling (`big` / `little`)
    pub const fn name(&self) -> &'static str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }

    /// Parse from annotation spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "big" => Some(ByteOrder::Big),
            "little" => Some(ByteOrder::Little),
            _ => None,
        }
    }
}

/// Defaults to network order so encodings never depend on the host.
impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::NETWORK
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
