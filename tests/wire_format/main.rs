//! Wire format conformance for binpack
//!
//! Organized by concern:
//! - layout: exact bytes for scalars, sequences and composites
//! - annotations: skip, placeholder, lenprefix and endian handling
//! - config: serialized configuration applied to decoding
//! - decode_in_place: slot reuse, capacity and malformed input
//! - dynamic: the runtime Shape/Value path against the typed path
//! - properties: randomized round trips

#[path = "../common/mod.rs"]
mod common;

mod config;
mod decode_in_place;
mod dynamic;
mod layout;
