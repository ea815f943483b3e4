use crate::config::{CodecConfig, DEFAULT_MAX_CONTAINER_DEPTH};
use crate::depth::{DepthBudget, DepthTracked};
use crate::error::{Error, Result};
use crate::format::Format;
use crate::serde::{ByteReader, OptionTag};
use crate::types::{Unit, WordPair};
use std::ops::Range;
use std::str;
use tracing::debug;

const MAX_CHAR_LEN: usize = 4;

/// Consumes primitive values from a borrowed input buffer, validating every byte.
///
/// One instance serves one deserialize call tree.
/// Consumed bytes are never re-read.
pub struct Decoder<'de, F> {
    format: F,
    input: ByteReader<'de>,
    depth: DepthBudget,
}

impl<'de, F: Format> Decoder<'de, F> {
    /// The depth budget is the default limit, lowered to the format's ceiling if that is smaller.
    /// Only [`CodecConfig`] can raise it.
    pub fn new(format: F, input: &'de [u8]) -> Self {
        let max_depth = format.max_container_depth().min(DEFAULT_MAX_CONTAINER_DEPTH);
        Self {
            format,
            input: ByteReader::new(input),
            depth: DepthBudget::new(max_depth),
        }
    }

    pub fn with_config(format: F, input: &'de [u8], config: &CodecConfig) -> Result<Self> {
        config.validate(&format)?;
        Ok(Self {
            format,
            input: ByteReader::new(input),
            depth: DepthBudget::new(config.max_container_depth),
        })
    }

    pub fn format(&self) -> &F {
        &self.format
    }
    pub fn depth(&self) -> &DepthBudget {
        &self.depth
    }

    /// Read cursor.
    pub fn offset(&self) -> usize {
        self.input.offset()
    }
    pub fn remaining(&self) -> usize {
        self.input.remaining()
    }
    pub fn is_finished(&self) -> bool {
        self.input.is_empty()
    }

    /// Fails if any input is left unread.
    pub fn finish(self) -> Result<()> {
        let remaining = self.remaining();
        if remaining > 0 {
            debug!(remaining, "input has trailing bytes");
            return Err(Error::TrailingBytes(remaining));
        }
        Ok(())
    }
}

/* Fixed-width primitives. */
impl<'de, F: Format> Decoder<'de, F> {
    pub fn decode_unit(&mut self) -> Result<Unit> {
        Ok(Unit)
    }

    pub fn decode_bool(&mut self) -> Result<bool> {
        match self.input.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            byte => Err(Error::invalid_value("bool", byte)),
        }
    }

    pub fn decode_u8(&mut self) -> Result<u8> {
        self.input.read_u8()
    }
    pub fn decode_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_u128(&mut self) -> Result<u128> {
        let words = WordPair::from_le_bytes(self.input.read_array()?);
        Ok(u128::from(words))
    }

    pub fn decode_i8(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_i128(&mut self) -> Result<i128> {
        let words = WordPair::from_le_bytes(self.input.read_array()?);
        Ok(i128::from(words))
    }

    pub fn decode_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.input.read_array()?))
    }
    pub fn decode_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.input.read_array()?))
    }

    /// Feeds one byte at a time to the UTF-8 validator until a single scalar comes out.
    ///
    /// Fails as soon as the bytes seen so far cannot begin any scalar,
    /// and after the fourth byte if none has resolved.
    pub fn decode_char(&mut self) -> Result<char> {
        let start = self.offset();
        let mut utf8 = [0u8; MAX_CHAR_LEN];
        for len in 1..=MAX_CHAR_LEN {
            utf8[len - 1] = self.input.read_u8()?;
            match str::from_utf8(&utf8[..len]) {
                Ok(s) => {
                    let mut chars = s.chars();
                    return match (chars.next(), chars.next()) {
                        (Some(c), None) => Ok(c),
                        _ => Err(Error::InvalidChar { offset: start }),
                    };
                }
                // The prefix is invalid no matter what follows.
                Err(e) if e.error_len().is_some() => {
                    return Err(Error::InvalidChar { offset: start });
                }
                // Incomplete. Needs another byte.
                Err(_) => {}
            }
        }
        Err(Error::InvalidChar { offset: start })
    }

    pub fn decode_option_tag(&mut self) -> Result<bool> {
        let tag = OptionTag::from_byte(self.input.read_u8()?)?;
        Ok(bool::from(tag))
    }
}

/* Length-prefixed primitives. */
impl<'de, F: Format> Decoder<'de, F> {
    pub fn decode_byte_slice(&mut self) -> Result<&'de [u8]> {
        let len = self.decode_len()?;
        self.input.read_slice(len)
    }
    pub fn decode_bytes(&mut self) -> Result<Vec<u8>> {
        Ok(self.decode_byte_slice()?.to_vec())
    }

    /// Strict. Invalid UTF-8 is an error, never replaced.
    pub fn decode_str_slice(&mut self) -> Result<&'de str> {
        let len = self.decode_len()?;
        let offset = self.offset();
        let bytes = self.input.read_slice(len)?;
        str::from_utf8(bytes).map_err(|source| Error::InvalidUtf8 { offset, source })
    }
    pub fn decode_str(&mut self) -> Result<String> {
        Ok(self.decode_str_slice()?.to_owned())
    }
}

/* Format hooks. */
impl<'de, F: Format> Decoder<'de, F> {
    pub fn decode_len(&mut self) -> Result<usize> {
        let len = self.format.decode_len(&mut self.input)?;
        if len > self.format.max_length() {
            return Err(Error::length_out_of_range(len));
        }
        Ok(len)
    }

    pub fn decode_variant_index(&mut self) -> Result<u32> {
        self.format.decode_variant_index(&mut self.input)
    }

    /// [`Decoder::decode_variant_index`], plus the range check against the enum's variant count.
    pub fn decode_variant_index_below(&mut self, variant_count: u32) -> Result<u32> {
        let index = self.decode_variant_index()?;
        if index >= variant_count {
            return Err(Error::invalid_value("variant index", index));
        }
        Ok(index)
    }

    /// `key1` and `key2` are ranges of already-consumed input.
    pub fn check_that_key_slices_are_increasing(
        &self,
        key1: Range<usize>,
        key2: Range<usize>,
    ) -> Result<()> {
        let key1 = self.consumed(key1)?;
        let key2_end = key2.end;
        let key2 = self.consumed(key2)?;
        let res = self.format.check_key_order(key1, key2);
        if res.is_err() {
            debug!(key_end = key2_end, "map keys out of canonical order");
        }
        res
    }

    fn consumed(&self, range: Range<usize>) -> Result<&'de [u8]> {
        let offset = self.offset();
        if range.start > range.end || range.end > offset {
            return Err(Error::invalid_range("map key", range, offset));
        }
        Ok(&self.input.input()[range])
    }
}

impl<'de, F> DepthTracked for Decoder<'de, F> {
    fn depth_mut(&mut self) -> &mut DepthBudget {
        &mut self.depth
    }
}
