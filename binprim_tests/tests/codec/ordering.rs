use anyhow::Result;
use binprim_formats::{canonical, fast, CanonicalFormat};
use binprim_types::{Encoder, Error, Format};
use itertools::Itertools;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

fn gen_keys() -> Vec<u16> {
    (0u16..64).map(|i| i.wrapping_mul(1031)).collect()
}

/// Entries as a hand-rolled encoder would write them, bypassing any sorting.
fn raw_entries<F: Format>(format: F, entries: &[(&str, u8)]) -> Result<Vec<u8>> {
    let mut enc = Encoder::new(format);
    enc.encode_len(entries.len())?;
    for (k, v) in entries {
        enc.encode_str(k)?;
        enc.encode_u8(*v)?;
    }
    Ok(enc.into_bytes())
}

pub fn test_canonical_ordering() -> Result<()> {
    insertion_order_is_irrelevant()?;
    byte_order_not_value_order()?;
    misordered_input_rejected()?;
    Ok(())
}

fn insertion_order_is_irrelevant() -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut keys = gen_keys();

    let sorted = keys.iter().map(|k| (*k, k % 3 == 0)).collect::<BTreeMap<_, _>>();
    let expected = canonical::to_bytes(&sorted)?;
    let expected_set = canonical::to_bytes(&sorted.keys().copied().collect::<BTreeSet<_>>())?;
    for _ in 0..16 {
        keys.shuffle(&mut rng);
        let mut map = HashMap::new();
        for k in keys.iter() {
            map.insert(*k, k % 3 == 0);
        }
        assert_eq!(canonical::to_bytes(&map)?, expected);

        let set = keys.iter().copied().collect::<HashSet<_>>();
        assert_eq!(canonical::to_bytes(&set)?, expected_set);
    }

    let words = ["", "a", "ab", "b"];
    let mut encodings = HashSet::new();
    for perm in words.iter().permutations(words.len()) {
        let mut map = HashMap::new();
        for w in perm {
            map.insert(w.to_string(), w.len() as u8);
        }
        let bytes = canonical::to_bytes(&map)?;
        assert_eq!(canonical::from_bytes::<HashMap<String, u8>>(&bytes)?, map);
        encodings.insert(bytes);
    }
    assert_eq!(encodings.len(), 1);
    Ok(())
}

fn byte_order_not_value_order() -> Result<()> {
    // Length-prefixed, so "b" (01 62) sorts before "ab" (02 61 62).
    let map = BTreeMap::from([
        (String::from("b"), 1u8),
        (String::from("a"), 2),
        (String::from("ab"), 3),
    ]);
    let bytes = canonical::to_bytes(&map)?;
    assert_eq!(bytes, vec![3, 1, b'a', 2, 1, b'b', 1, 2, b'a', b'b', 3]);
    assert_eq!(
        bytes,
        raw_entries(CanonicalFormat, &[("a", 2), ("b", 1), ("ab", 3)])?
    );
    assert_eq!(canonical::from_bytes::<BTreeMap<String, u8>>(&bytes)?, map);

    // Little-endian, so 256 (00 01) sorts before 1 (01 00).
    let set = BTreeSet::from([1u16, 256]);
    assert_eq!(canonical::to_bytes(&set)?, vec![2, 0x00, 0x01, 0x01, 0x00]);
    Ok(())
}

fn misordered_input_rejected() -> Result<()> {
    let swapped = raw_entries(CanonicalFormat, &[("b", 1), ("a", 2)])?;
    assert_eq!(
        canonical::from_bytes::<BTreeMap<String, u8>>(&swapped),
        Err(Error::NonCanonicalOrder)
    );
    assert_eq!(
        canonical::from_bytes::<HashMap<String, u8>>(&swapped),
        Err(Error::NonCanonicalOrder)
    );

    let repeated = raw_entries(CanonicalFormat, &[("a", 1), ("a", 2)])?;
    assert_eq!(
        canonical::from_bytes::<BTreeMap<String, u8>>(&repeated),
        Err(Error::NonCanonicalOrder)
    );

    assert_eq!(
        canonical::from_bytes::<HashSet<u8>>(&[2, 5, 5]),
        Err(Error::NonCanonicalOrder)
    );
    assert_eq!(
        canonical::from_bytes::<BTreeSet<u8>>(&[2, 6, 5]),
        Err(Error::NonCanonicalOrder)
    );
    assert_eq!(
        canonical::from_bytes::<BTreeSet<u8>>(&[2, 5, 6])?,
        BTreeSet::from([5, 6])
    );
    Ok(())
}

pub fn test_fast_ordering() -> Result<()> {
    // Written in iteration order, unsorted.
    let map = BTreeMap::from([(String::from("b"), 1u8), (String::from("ab"), 3)]);
    let bytes = fast::to_bytes(&map)?;
    assert_eq!(bytes, raw_entries(fast::FastFormat, &[("ab", 3), ("b", 1)])?);

    let swapped = raw_entries(fast::FastFormat, &[("b", 1), ("a", 2)])?;
    let decoded = fast::from_bytes::<BTreeMap<String, u8>>(&swapped)?;
    assert_eq!(decoded.keys().collect_vec(), vec!["a", "b"]);

    // Last write wins.
    let repeated = raw_entries(fast::FastFormat, &[("a", 1), ("a", 2)])?;
    let decoded = fast::from_bytes::<HashMap<String, u8>>(&repeated)?;
    assert_eq!(decoded, HashMap::from([(String::from("a"), 2)]));

    // A set is a map with unit values, so it reads back as a sequence.
    let bytes = fast::to_bytes(&BTreeSet::from([9u8, 4]))?;
    assert_eq!(fast::from_bytes::<Vec<u8>>(&bytes)?, vec![4, 9]);
    Ok(())
}
