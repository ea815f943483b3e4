use crate::error::{Error, Result};

/// Forward-only cursor over a borrowed input buffer.
///
/// A read that needs more bytes than remain fails without moving the cursor.
#[derive(Clone, Debug)]
pub struct ByteReader<'de> {
    buf: &'de [u8],
    pos: usize,
}

impl<'de> ByteReader<'de> {
    pub fn new(buf: &'de [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The whole input, including already-consumed bytes.
    pub fn input(&self) -> &'de [u8] {
        self.buf
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'de [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(Error::truncated(self.pos, len, remaining));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_array<const LEN: usize>(&mut self) -> Result<[u8; LEN]> {
        let mut arr = [0u8; LEN];
        arr.copy_from_slice(self.read_slice(LEN)?);
        Ok(arr)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }
}
