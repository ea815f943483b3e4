//! # Serialization format
//!
//! The primitive de/serializable values are the fixed-width scalars, `char`,
//! UTF-8 text, byte blobs, option tags, and [`crate::types::Unit`].
//!
//! The below pseudocode depicts their serialized representations.
//! Every multi-byte integer and float is little-endian.
//! Nothing is aligned or padded.
//!
//! `len` and `variant_index` are written by the [`crate::format::Format`] in use;
//! their width is not fixed here.
//!
//! ```text
//! struct Unit {}
//!
//! struct bool {
//!     byte:           u8,             // 0 or 1
//! }
//!
//! struct U64 {
//!     body:           [u8; 8],
//! }
//!
//! struct U128 {
//!     low:            [u8; 8],
//!     high:           [u8; 8],        // i128 is the same, two's-complement
//! }
//!
//! struct Char {
//!     utf8:           [u8; 1..=4],
//! }
//!
//! struct Bytes or Str {
//!     len:            Format::len,
//!     body:           [u8; len],      // Str's body is valid UTF-8
//! }
//!
//! struct Option<T> {
//!     tag:            u8,             // 0 = absent, 1 = present
//!     payload:        T,              // only if tag == 1
//! }
//!
//! struct Seq<T> {
//!     len:            Format::len,
//!     elem_0:         T,
//!     ...
//! }
//!
//! struct Map<K, V> {
//!     len:            Format::len,
//!     key_0:          K,
//!     val_0:          V,
//!     ...
//!     // Entry order is decided by Format::sort_map_entries.
//! }
//!
//! struct Enum {
//!     variant_index:  Format::variant_index,
//!     payload:        ...,
//! }
//! ```

mod decoder;
mod encoder;
mod option_tag;
mod reader;

pub use decoder::*;
pub use encoder::*;
pub use option_tag::*;
pub use reader::*;
