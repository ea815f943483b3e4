use crate::config::CodecConfig;
use crate::error::Result;
use crate::format::Format;
use crate::serde::{Decoder, Encoder};

/// Drives the encoder with the primitive calls that mirror a value's structure.
pub trait Ser {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()>;

    fn ser_solo<F: Format>(&self, format: F, config: &CodecConfig) -> Result<Vec<u8>> {
        let mut enc = Encoder::with_config(format, config)?;
        self.ser(&mut enc)?;
        Ok(enc.into_bytes())
    }
}

/// Drives the decoder with the same calls [`Ser`] issued, in the same order.
pub trait Deser: Sized {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self>;

    fn deser_solo<F: Format>(buf: &[u8], format: F, config: &CodecConfig) -> Result<Self> {
        let mut dec = Decoder::with_config(format, buf, config)?;
        let moi = Self::deser(&mut dec)?;
        if config.reject_trailing_bytes {
            dec.finish()?;
        }
        Ok(moi)
    }
}

pub trait Serializable: Ser + Deser {}
impl<T: Ser + Deser> Serializable for T {}
