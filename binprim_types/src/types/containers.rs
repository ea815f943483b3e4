use crate::depth::DepthTracked;
use crate::error::Result;
use crate::format::Format;
use crate::serde::{Decoder, Encoder};
use crate::types::{Deser, Ser};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::Range;

/* Option and Box. */

impl<T: Ser> Ser for Option<T> {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        enc.encode_option_tag(self.is_some())?;
        if let Some(t) = self {
            t.ser(enc)?;
        }
        Ok(())
    }
}
impl<T: Deser> Deser for Option<T> {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        if dec.decode_option_tag()? {
            Ok(Some(T::deser(dec)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Ser + ?Sized> Ser for Box<T> {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        (**self).ser(enc)
    }
}
impl<T: Deser> Deser for Box<T> {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        Ok(Box::new(T::deser(dec)?))
    }
}

/* Tuples. Fields only; no length, no container. */

impl<A: Ser, B: Ser> Ser for (A, B) {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        self.0.ser(enc)?;
        self.1.ser(enc)
    }
}
impl<A: Deser, B: Deser> Deser for (A, B) {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let a = A::deser(dec)?;
        let b = B::deser(dec)?;
        Ok((a, b))
    }
}

impl<A: Ser, B: Ser, C: Ser> Ser for (A, B, C) {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        self.0.ser(enc)?;
        self.1.ser(enc)?;
        self.2.ser(enc)
    }
}
impl<A: Deser, B: Deser, C: Deser> Deser for (A, B, C) {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let a = A::deser(dec)?;
        let b = B::deser(dec)?;
        let c = C::deser(dec)?;
        Ok((a, b, c))
    }
}

/* Sequences. */

impl<T: Ser> Ser for [T] {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        enc.encode_len(self.len())?;
        let mut enc = enc.enter_container()?;
        for elem in self {
            elem.ser(&mut *enc)?;
        }
        Ok(())
    }
}
impl<T: Ser> Ser for Vec<T> {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        self.as_slice().ser(enc)
    }
}
impl<T: Deser> Deser for Vec<T> {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let len = dec.decode_len()?;
        let mut dec = dec.enter_container()?;
        // A hostile length must not translate into a hostile allocation.
        let mut elems = Vec::with_capacity(len.min(dec.remaining()));
        for _ in 0..len {
            elems.push(T::deser(&mut *dec)?);
        }
        Ok(elems)
    }
}

/* Maps and sets. */

fn ser_entries<'a, K, V, F, I>(enc: &mut Encoder<F>, len: usize, entries: I) -> Result<()>
where
    K: Ser + ?Sized + 'a,
    V: Ser + ?Sized + 'a,
    F: Format,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    enc.encode_len(len)?;
    let mut enc = enc.enter_container()?;
    let mut offsets = Vec::with_capacity(len);
    for (k, v) in entries {
        offsets.push(enc.offset());
        k.ser(&mut *enc)?;
        v.ser(&mut *enc)?;
    }
    enc.sort_map_entries(&offsets)?;
    Ok(())
}

/// Feeds each decoded entry to `insert`, checking every key against its predecessor.
fn deser_entries<K, V, F, I>(dec: &mut Decoder<'_, F>, mut insert: I) -> Result<()>
where
    K: Deser,
    V: Deser,
    F: Format,
    I: FnMut(K, V),
{
    let len = dec.decode_len()?;
    let mut dec = dec.enter_container()?;
    let mut prev_key: Option<Range<usize>> = None;
    for _ in 0..len {
        let key_start = dec.offset();
        let k = K::deser(&mut *dec)?;
        let key = key_start..dec.offset();
        if let Some(prev_key) = prev_key.replace(key.clone()) {
            dec.check_that_key_slices_are_increasing(prev_key, key)?;
        }
        let v = V::deser(&mut *dec)?;
        insert(k, v);
    }
    Ok(())
}

impl<K: Ser, V: Ser> Ser for BTreeMap<K, V> {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        ser_entries(enc, self.len(), self.iter())
    }
}
impl<K: Deser + Ord, V: Deser> Deser for BTreeMap<K, V> {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let mut map = BTreeMap::<K, V>::new();
        deser_entries(dec, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

impl<K: Ser, V: Ser, S> Ser for HashMap<K, V, S> {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        ser_entries(enc, self.len(), self.iter())
    }
}
impl<K, V, S> Deser for HashMap<K, V, S>
where
    K: Deser + Eq + Hash,
    V: Deser,
    S: BuildHasher + Default,
{
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let mut map = HashMap::<K, V, S>::default();
        deser_entries(dec, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

impl<K: Ser> Ser for BTreeSet<K> {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        ser_entries(enc, self.len(), self.iter().map(|k| (k, &())))
    }
}
impl<K: Deser + Ord> Deser for BTreeSet<K> {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let mut set = BTreeSet::<K>::new();
        deser_entries(dec, |k, (): ()| {
            set.insert(k);
        })?;
        Ok(set)
    }
}

impl<K: Ser, S> Ser for HashSet<K, S> {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        ser_entries(enc, self.len(), self.iter().map(|k| (k, &())))
    }
}
impl<K, S> Deser for HashSet<K, S>
where
    K: Deser + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let mut set = HashSet::<K, S>::default();
        deser_entries(dec, |k, (): ()| {
            set.insert(k);
        })?;
        Ok(set)
    }
}
