use crate::{CanonicalFormat, FastFormat};
use binprim_types::{ByteReader, Error, Format, Result};
use derive_more::{Display, From};
use std::str::FromStr;

/// Either format, picked at runtime.
#[derive(From, Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum AnyFormat {
    #[display(fmt = "canonical")]
    Canonical(CanonicalFormat),
    #[display(fmt = "fast")]
    Fast(FastFormat),
}

impl FromStr for AnyFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "canonical" => Ok(AnyFormat::Canonical(CanonicalFormat)),
            "fast" => Ok(AnyFormat::Fast(FastFormat)),
            _ => Err(Error::invalid_config(format!("Unknown format {s:?}"))),
        }
    }
}

macro_rules! dispatch {
    ($slf:expr, $format:ident => $call:expr) => {
        match $slf {
            AnyFormat::Canonical($format) => $call,
            AnyFormat::Fast($format) => $call,
        }
    };
}

impl Format for AnyFormat {
    fn max_container_depth(&self) -> usize {
        dispatch!(self, f => f.max_container_depth())
    }
    fn max_length(&self) -> usize {
        dispatch!(self, f => f.max_length())
    }
    fn encode_len(&self, len: usize, out: &mut Vec<u8>) -> Result<()> {
        dispatch!(self, f => f.encode_len(len, out))
    }
    fn decode_len(&self, input: &mut ByteReader<'_>) -> Result<usize> {
        dispatch!(self, f => f.decode_len(input))
    }
    fn encode_variant_index(&self, index: u32, out: &mut Vec<u8>) -> Result<()> {
        dispatch!(self, f => f.encode_variant_index(index, out))
    }
    fn decode_variant_index(&self, input: &mut ByteReader<'_>) -> Result<u32> {
        dispatch!(self, f => f.decode_variant_index(input))
    }
    fn sort_map_entries(&self, entries: &mut [&[u8]]) {
        dispatch!(self, f => f.sort_map_entries(entries))
    }
    fn check_key_order(&self, key1: &[u8], key2: &[u8]) -> Result<()> {
        dispatch!(self, f => f.check_key_order(key1, key2))
    }
}
