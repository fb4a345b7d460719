//! Encode/decode configuration.
//!
//! This module provides the settings a call carries down the traversal:
//! the ambient byte order and the decode limits.

use crate::limits::Limits;
use crate::order::ByteOrder;
use serde::{Deserialize, Serialize};

/// Traversal configuration.
///
/// Copied into every node of the walk; a member with a byte-order override
/// passes its children a copy with the order replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ambient byte order (default: big endian).
    pub byte_order: ByteOrder,

    /// Decode limits.
    #[serde(default)]
    pub limits: Limits,
}

impl Config {
    /// Create a configuration with the given byte order and no decode cap.
    pub fn new(byte_order: ByteOrder) -> Self {
        Config {
            byte_order,
            limits: Limits::default(),
        }
    }

    /// Set byte order (builder pattern).
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set limits (builder pattern).
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_sequence_len == 0 {
            return Err(ConfigError::ZeroSequenceLimit);
        }
        Ok(())
    }

    /// Create a configuration for testing (small limits).
    pub fn for_testing() -> Self {
        Config {
            byte_order: ByteOrder::Big,
            limits: Limits::with_small_limits(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A zero sequence limit rejects every non-empty sequence.
    #[error("max_sequence_len must be at least 1")]
    ZeroSequenceLimit,
}
