//! Unsigned LEB128 for values up to `u32::MAX`, minimal encodings only.

use binprim_types::{ByteReader, Error, Result};

const WHAT: &str = "ULEB128";

pub fn encode_u32(mut value: u32, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Rejects groups that would overflow 32 bits and non-minimal encodings (a final zero group).
pub fn decode_u32(input: &mut ByteReader<'_>) -> Result<u32> {
    let mut value: u64 = 0;
    for shift in (0..32).step_by(7) {
        let byte = input.read_u8()?;
        let digit = byte & 0x7f;
        value |= u64::from(digit) << shift;
        if digit == byte {
            if shift > 0 && digit == 0 {
                return Err(Error::malformed(WHAT, "non-canonical encoding"));
            }
            return u32::try_from(value)
                .map_err(|_| Error::malformed(WHAT, "overflow while parsing uint32 value"));
        }
    }
    Err(Error::malformed(WHAT, "overflow while parsing uint32 value"))
}
