use crate::uleb128;
use binprim_types::types::{Deser, Ser};
use binprim_types::{ByteReader, CodecConfig, Error, Format, Result};

pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;
pub const MAX_CONTAINER_DEPTH: usize = 500;

/// Exactly one valid byte sequence per value.
///
/// Lengths and variant indexes are minimal ULEB128.
/// Map and set entries are sorted by their serialized bytes, and decoding
/// rejects any map whose keys are not strictly increasing.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct CanonicalFormat;

impl Format for CanonicalFormat {
    fn max_container_depth(&self) -> usize {
        MAX_CONTAINER_DEPTH
    }
    fn max_length(&self) -> usize {
        MAX_SEQUENCE_LENGTH
    }

    fn encode_len(&self, len: usize, out: &mut Vec<u8>) -> Result<()> {
        if len > MAX_SEQUENCE_LENGTH {
            return Err(Error::length_out_of_range(len));
        }
        uleb128::encode_u32(len as u32, out);
        Ok(())
    }
    fn decode_len(&self, input: &mut ByteReader<'_>) -> Result<usize> {
        let len = uleb128::decode_u32(input)? as usize;
        if len > MAX_SEQUENCE_LENGTH {
            return Err(Error::length_out_of_range(len));
        }
        Ok(len)
    }

    fn encode_variant_index(&self, index: u32, out: &mut Vec<u8>) -> Result<()> {
        uleb128::encode_u32(index, out);
        Ok(())
    }
    fn decode_variant_index(&self, input: &mut ByteReader<'_>) -> Result<u32> {
        uleb128::decode_u32(input)
    }

    /// Keys are length-prefixed or fixed-width, so no key's bytes are a prefix of
    /// another's, and comparing whole entries orders them by key.
    fn sort_map_entries(&self, entries: &mut [&[u8]]) {
        entries.sort_unstable();
    }
    fn check_key_order(&self, key1: &[u8], key2: &[u8]) -> Result<()> {
        if key1 < key2 {
            Ok(())
        } else {
            Err(Error::NonCanonicalOrder)
        }
    }
}

pub fn to_bytes<T: Ser + ?Sized>(value: &T) -> Result<Vec<u8>> {
    value.ser_solo(CanonicalFormat, &CodecConfig::default())
}

/// Fails if `buf` holds anything after the value.
pub fn from_bytes<T: Deser>(buf: &[u8]) -> Result<T> {
    T::deser_solo(buf, CanonicalFormat, &CodecConfig::default())
}
