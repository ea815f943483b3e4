//! The extension points a concrete wire format supplies.
//!
//! The encoder and decoder implement every fixed-width primitive themselves.
//! A format only decides three things:
//!
//! - how a length or element count is written (`encode_len` / `decode_len`),
//! - how an enum discriminant is written (`encode_variant_index` / `decode_variant_index`),
//! - how map and set entries are ordered (`sort_map_entries` on encode,
//!   `check_key_order` on decode).
//!
//! Each pair must round-trip exactly. A canonical format's decode side must also
//! reject every byte sequence its encode side would never produce.

use crate::error::Result;
use crate::serde::ByteReader;

pub trait Format {
    /// Hard ceiling on the container depth a codec for this format may be configured with.
    fn max_container_depth(&self) -> usize;

    /// Largest length `encode_len` accepts and `decode_len` returns.
    fn max_length(&self) -> usize;

    fn encode_len(&self, len: usize, out: &mut Vec<u8>) -> Result<()>;
    fn decode_len(&self, input: &mut ByteReader<'_>) -> Result<usize>;

    fn encode_variant_index(&self, index: u32, out: &mut Vec<u8>) -> Result<()>;
    /// Rejects structurally invalid encodings only.
    /// The caller, which knows how many variants exist, checks the range.
    fn decode_variant_index(&self, input: &mut ByteReader<'_>) -> Result<u32>;

    /// Permutes fully encoded entries (key bytes followed by value bytes) into wire order.
    /// Never alters the bytes of an entry.
    fn sort_map_entries(&self, entries: &mut [&[u8]]);

    /// Fails unless `key1` strictly precedes `key2` in this format's canonical order.
    fn check_key_order(&self, key1: &[u8], key2: &[u8]) -> Result<()>;
}

impl<F: Format + ?Sized> Format for &F {
    fn max_container_depth(&self) -> usize {
        (**self).max_container_depth()
    }
    fn max_length(&self) -> usize {
        (**self).max_length()
    }
    fn encode_len(&self, len: usize, out: &mut Vec<u8>) -> Result<()> {
        (**self).encode_len(len, out)
    }
    fn decode_len(&self, input: &mut ByteReader<'_>) -> Result<usize> {
        (**self).decode_len(input)
    }
    fn encode_variant_index(&self, index: u32, out: &mut Vec<u8>) -> Result<()> {
        (**self).encode_variant_index(index, out)
    }
    fn decode_variant_index(&self, input: &mut ByteReader<'_>) -> Result<u32> {
        (**self).decode_variant_index(input)
    }
    fn sort_map_entries(&self, entries: &mut [&[u8]]) {
        (**self).sort_map_entries(entries)
    }
    fn check_key_order(&self, key1: &[u8], key2: &[u8]) -> Result<()> {
        (**self).check_key_order(key1, key2)
    }
}
