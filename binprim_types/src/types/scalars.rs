use crate::error::Result;
use crate::format::Format;
use crate::serde::{Decoder, Encoder};
use crate::types::{Bytes, Deser, Ser, Unit};

macro_rules! impl_scalar {
    ($ty:ty, $encode:ident, $decode:ident) => {
        impl Ser for $ty {
            fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
                enc.$encode(*self)
            }
        }
        impl Deser for $ty {
            fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
                dec.$decode()
            }
        }
    };
}

impl_scalar!(bool, encode_bool, decode_bool);
impl_scalar!(u8, encode_u8, decode_u8);
impl_scalar!(u16, encode_u16, decode_u16);
impl_scalar!(u32, encode_u32, decode_u32);
impl_scalar!(u64, encode_u64, decode_u64);
impl_scalar!(u128, encode_u128, decode_u128);
impl_scalar!(i8, encode_i8, decode_i8);
impl_scalar!(i16, encode_i16, decode_i16);
impl_scalar!(i32, encode_i32, decode_i32);
impl_scalar!(i64, encode_i64, decode_i64);
impl_scalar!(i128, encode_i128, decode_i128);
impl_scalar!(f32, encode_f32, decode_f32);
impl_scalar!(f64, encode_f64, decode_f64);
impl_scalar!(char, encode_char, decode_char);
impl_scalar!(Unit, encode_unit, decode_unit);

impl Ser for () {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        enc.encode_unit(Unit)
    }
}
impl Deser for () {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        dec.decode_unit()?;
        Ok(())
    }
}

impl Ser for str {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        enc.encode_str(self)
    }
}
impl Ser for String {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        enc.encode_str(self)
    }
}
impl Deser for String {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        dec.decode_str()
    }
}

impl Ser for Bytes {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        enc.encode_bytes(self)
    }
}
impl Deser for Bytes {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        Ok(Bytes(dec.decode_bytes()?))
    }
}
