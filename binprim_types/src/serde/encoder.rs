use crate::config::{CodecConfig, DEFAULT_MAX_CONTAINER_DEPTH};
use crate::depth::{DepthBudget, DepthTracked};
use crate::error::{Error, Result};
use crate::format::Format;
use crate::serde::OptionTag;
use crate::types::{Unit, WordPair};
use tracing::trace;

/// Appends primitive values to an owned buffer, in the order the caller asks for them.
///
/// One instance serves one serialize call tree.
pub struct Encoder<F> {
    format: F,
    buf: Vec<u8>,
    depth: DepthBudget,
}

impl<F: Format> Encoder<F> {
    /// The depth budget is the default limit, lowered to the format's ceiling if that is smaller.
    /// Only [`CodecConfig`] can raise it.
    pub fn new(format: F) -> Self {
        let max_depth = format.max_container_depth().min(DEFAULT_MAX_CONTAINER_DEPTH);
        Self {
            format,
            buf: vec![],
            depth: DepthBudget::new(max_depth),
        }
    }

    pub fn with_config(format: F, config: &CodecConfig) -> Result<Self> {
        config.validate(&format)?;
        Ok(Self {
            format,
            buf: vec![],
            depth: DepthBudget::new(config.max_container_depth),
        })
    }

    pub fn format(&self) -> &F {
        &self.format
    }
    pub fn depth(&self) -> &DepthBudget {
        &self.depth
    }

    /// Write cursor. Equals the count of bytes written so far.
    pub fn offset(&self) -> usize {
        self.buf.len()
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Empties the buffer. The depth budget is left as is.
    pub fn reset(&mut self) {
        trace!(discarded = self.buf.len(), "encoder reset");
        self.buf.clear();
    }
}

/* Fixed-width primitives. */
impl<F: Format> Encoder<F> {
    pub fn encode_unit(&mut self, _unit: Unit) -> Result<()> {
        Ok(())
    }

    pub fn encode_bool(&mut self, b: bool) -> Result<()> {
        self.buf.push(u8::from(b));
        Ok(())
    }

    pub fn encode_u8(&mut self, i: u8) -> Result<()> {
        self.buf.push(i);
        Ok(())
    }
    pub fn encode_u16(&mut self, i: u16) -> Result<()> {
        self.buf.extend_from_slice(&i.to_le_bytes());
        Ok(())
    }
    pub fn encode_u32(&mut self, i: u32) -> Result<()> {
        self.buf.extend_from_slice(&i.to_le_bytes());
        Ok(())
    }
    pub fn encode_u64(&mut self, i: u64) -> Result<()> {
        self.buf.extend_from_slice(&i.to_le_bytes());
        Ok(())
    }
    pub fn encode_u128(&mut self, i: u128) -> Result<()> {
        self.buf
            .extend_from_slice(&WordPair::from(i).to_le_bytes());
        Ok(())
    }

    pub fn encode_i8(&mut self, i: i8) -> Result<()> {
        self.buf.extend_from_slice(&i.to_le_bytes());
        Ok(())
    }
    pub fn encode_i16(&mut self, i: i16) -> Result<()> {
        self.buf.extend_from_slice(&i.to_le_bytes());
        Ok(())
    }
    pub fn encode_i32(&mut self, i: i32) -> Result<()> {
        self.buf.extend_from_slice(&i.to_le_bytes());
        Ok(())
    }
    pub fn encode_i64(&mut self, i: i64) -> Result<()> {
        self.buf.extend_from_slice(&i.to_le_bytes());
        Ok(())
    }
    pub fn encode_i128(&mut self, i: i128) -> Result<()> {
        self.buf
            .extend_from_slice(&WordPair::from(i).to_le_bytes());
        Ok(())
    }

    pub fn encode_f32(&mut self, f: f32) -> Result<()> {
        self.buf.extend_from_slice(&f.to_le_bytes());
        Ok(())
    }
    pub fn encode_f64(&mut self, f: f64) -> Result<()> {
        self.buf.extend_from_slice(&f.to_le_bytes());
        Ok(())
    }

    pub fn encode_char(&mut self, c: char) -> Result<()> {
        let mut utf8 = [0u8; 4];
        self.buf
            .extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
        Ok(())
    }

    /// Only the tag. The payload, if present, is a separate call.
    pub fn encode_option_tag(&mut self, present: bool) -> Result<()> {
        self.buf.push(OptionTag::from(present).to_byte());
        Ok(())
    }
}

/* Length-prefixed primitives. */
impl<F: Format> Encoder<F> {
    pub fn encode_bytes(&mut self, b: &[u8]) -> Result<()> {
        self.encode_len(b.len())?;
        self.buf.extend_from_slice(b);
        Ok(())
    }

    pub fn encode_str(&mut self, s: &str) -> Result<()> {
        self.encode_bytes(s.as_bytes())
    }
}

/* Format hooks. */
impl<F: Format> Encoder<F> {
    pub fn encode_len(&mut self, len: usize) -> Result<()> {
        self.format.encode_len(len, &mut self.buf)
    }

    pub fn encode_variant_index(&mut self, index: u32) -> Result<()> {
        self.format.encode_variant_index(index, &mut self.buf)
    }

    /// Reorders the map entries at the tail of the buffer into the format's wire order.
    ///
    /// `offsets[i]` is where entry `i` starts. The last entry runs to the end of the buffer.
    /// Offsets must be non-decreasing and within the buffer; otherwise nothing moves.
    pub fn sort_map_entries(&mut self, offsets: &[usize]) -> Result<()> {
        let len = self.buf.len();
        for (i, &entry_start) in offsets.iter().enumerate() {
            let entry_end = offsets.get(i + 1).copied().unwrap_or(len);
            if entry_start > entry_end || entry_end > len {
                return Err(Error::invalid_range("map entry", entry_start..entry_end, len));
            }
        }
        if offsets.len() < 2 {
            return Ok(());
        }
        let start = offsets[0];

        let tail = self.buf.split_off(start);
        let mut entries = Vec::with_capacity(offsets.len());
        for (i, &entry_start) in offsets.iter().enumerate() {
            let entry_end = offsets.get(i + 1).copied().unwrap_or(len);
            entries.push(&tail[entry_start - start..entry_end - start]);
        }

        self.format.sort_map_entries(&mut entries);
        trace!(entries = entries.len(), "map entries reordered");

        for entry in entries {
            self.buf.extend_from_slice(entry);
        }
        Ok(())
    }
}

impl<F> DepthTracked for Encoder<F> {
    fn depth_mut(&mut self) -> &mut DepthBudget {
        &mut self.depth
    }
}
