//! Byte-level encode/decode primitives shared by every binary wire format.
//!
//! A [`format::Format`] supplies length encoding, variant-index encoding and map-entry
//! ordering. [`Encoder`] and [`Decoder`] supply everything else, bit-exact.

pub mod config;
pub mod depth;
pub mod error;
pub mod format;
pub mod serde;
pub mod types;

pub use config::CodecConfig;
pub use depth::{DepthBudget, DepthTracked, Nested};
pub use error::{Error, Result};
pub use format::Format;
pub use serde::{ByteReader, Decoder, Encoder};
