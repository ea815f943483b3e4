use super::round_trip;
use super::schema::{gen_drawing, Shape};
use anyhow::Result;
use binprim_types::types::{Bytes, Unit};
use binprim_types::{Decoder, Encoder, Format};
use std::collections::{BTreeSet, HashMap};

pub fn test_round_trips<F: Format + Copy>(format: F) -> Result<()> {
    scalar_boundaries(format)?;
    text_and_blobs(format)?;
    options_and_units(format)?;
    containers(format)?;
    wide_integers(format)?;
    Ok(())
}

fn scalar_boundaries<F: Format + Copy>(format: F) -> Result<()> {
    for b in [false, true] {
        assert_eq!(round_trip(format, &b)?, vec![u8::from(b)]);
    }
    for i in [0, u8::MAX] {
        round_trip(format, &i)?;
    }
    for i in [0, u16::MAX] {
        round_trip(format, &i)?;
    }
    for i in [0, u32::MAX] {
        round_trip(format, &i)?;
    }
    for i in [0, u64::MAX] {
        round_trip(format, &i)?;
    }
    for i in [i8::MIN, 0, i8::MAX] {
        round_trip(format, &i)?;
    }
    for i in [i16::MIN, 0, i16::MAX] {
        round_trip(format, &i)?;
    }
    for i in [i32::MIN, 0, i32::MAX] {
        round_trip(format, &i)?;
    }
    for i in [i64::MIN, 0, i64::MAX] {
        assert_eq!(round_trip(format, &i)?, i.to_le_bytes().to_vec());
    }
    for f in [0.0f32, -1.5, f32::MIN, f32::MAX, f32::INFINITY] {
        round_trip(format, &f)?;
    }
    for f in [0.0f64, -0.0, f64::MIN_POSITIVE, f64::MAX, f64::NEG_INFINITY] {
        assert_eq!(round_trip(format, &f)?, f.to_le_bytes().to_vec());
    }
    for c in ['\0', 'a', 'é', '€', '😀', char::MAX] {
        let bytes = round_trip(format, &c)?;
        assert_eq!(bytes.len(), c.len_utf8());
    }
    Ok(())
}

fn text_and_blobs<F: Format + Copy>(format: F) -> Result<()> {
    round_trip(format, &String::new())?;
    round_trip(format, &String::from("asdf"))?;
    round_trip(format, &"ü😀\u{0}".to_string())?;
    round_trip(format, &Bytes(vec![]))?;
    round_trip(format, &Bytes((0..=255).collect()))?;

    // A string and a blob with the same bytes look the same on the wire.
    let mut enc = Encoder::new(format);
    enc.encode_str("zxcv")?;
    let str_bytes = enc.into_bytes();
    let mut enc = Encoder::new(format);
    enc.encode_bytes(b"zxcv")?;
    assert_eq!(str_bytes, enc.into_bytes());

    let mut dec = Decoder::new(format, &str_bytes);
    assert_eq!(dec.decode_str_slice()?, "zxcv");
    dec.finish()?;
    Ok(())
}

fn options_and_units<F: Format + Copy>(format: F) -> Result<()> {
    assert_eq!(round_trip(format, &Unit)?, Vec::<u8>::new());
    assert_eq!(round_trip(format, &())?, Vec::<u8>::new());
    assert_eq!(round_trip(format, &Option::<u64>::None)?, vec![0]);
    let some = round_trip(format, &Some(7u16))?;
    assert_eq!(some, vec![1, 7, 0]);
    round_trip(format, &Some(Some(Unit)))?;
    round_trip(format, &Some(String::new()))?;
    Ok(())
}

fn containers<F: Format + Copy>(format: F) -> Result<()> {
    round_trip(format, &Vec::<u32>::new())?;
    round_trip(format, &vec![vec![1u8, 2], vec![], vec![3]])?;
    round_trip(format, &(7u8, String::from("x"), -1i16))?;
    round_trip(format, &Box::new(Shape::Circle { radius: -0.25 }))?;
    round_trip(format, &BTreeSet::from([3u64, 1, 2]))?;
    round_trip(
        format,
        &HashMap::from([(1u8, Bytes(vec![1])), (0u8, Bytes(vec![]))]),
    )?;
    round_trip(format, &gen_drawing())?;
    Ok(())
}

fn wide_integers<F: Format + Copy>(format: F) -> Result<()> {
    let boundary = (1u128 << 64) | u128::from(u64::MAX);
    let bytes = round_trip(format, &boundary)?;
    let mut expected = vec![0xffu8; 8];
    expected.extend_from_slice(&1u64.to_le_bytes());
    assert_eq!(bytes, expected);

    for i in [0, 1, u128::from(u64::MAX), 1u128 << 64, u128::MAX] {
        round_trip(format, &i)?;
    }
    for i in [i128::MIN, -(1i128 << 64), -1, 0, 1, i128::MAX] {
        round_trip(format, &i)?;
    }
    assert_eq!(round_trip(format, &-1i128)?, vec![0xff; 16]);
    Ok(())
}
