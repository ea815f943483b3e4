use binprim_types::types::{Deser, Ser};
use binprim_types::{ByteReader, CodecConfig, Error, Format, Result};

/// Fixed-width and order-preserving. Cheap to write, but the same map may
/// serialize differently depending on iteration order.
///
/// Lengths are `u64` and variant indexes `u32`, both little-endian.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct FastFormat;

/// Lengths above this read as negative to a signed 64-bit reader, and are rejected.
const MAX_LENGTH: u64 = i64::MAX as u64;

impl Format for FastFormat {
    fn max_container_depth(&self) -> usize {
        usize::MAX
    }
    fn max_length(&self) -> usize {
        usize::try_from(MAX_LENGTH).unwrap_or(usize::MAX)
    }

    fn encode_len(&self, len: usize, out: &mut Vec<u8>) -> Result<()> {
        let len = u64::try_from(len).map_err(|_| Error::length_out_of_range(len))?;
        if len > MAX_LENGTH {
            return Err(Error::length_out_of_range(len));
        }
        out.extend_from_slice(&len.to_le_bytes());
        Ok(())
    }
    fn decode_len(&self, input: &mut ByteReader<'_>) -> Result<usize> {
        let len = u64::from_le_bytes(input.read_array()?);
        if len > MAX_LENGTH {
            return Err(Error::length_out_of_range(len));
        }
        usize::try_from(len).map_err(|_| Error::length_out_of_range(len))
    }

    fn encode_variant_index(&self, index: u32, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&index.to_le_bytes());
        Ok(())
    }
    fn decode_variant_index(&self, input: &mut ByteReader<'_>) -> Result<u32> {
        Ok(u32::from_le_bytes(input.read_array()?))
    }

    fn sort_map_entries(&self, _entries: &mut [&[u8]]) {}
    fn check_key_order(&self, _key1: &[u8], _key2: &[u8]) -> Result<()> {
        Ok(())
    }
}

pub fn to_bytes<T: Ser + ?Sized>(value: &T) -> Result<Vec<u8>> {
    value.ser_solo(FastFormat, &CodecConfig::default())
}

/// Fails if `buf` holds anything after the value.
pub fn from_bytes<T: Deser>(buf: &[u8]) -> Result<T> {
    T::deser_solo(buf, FastFormat, &CodecConfig::default())
}
