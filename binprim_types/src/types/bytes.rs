use derive_more::{Deref, DerefMut, From, Into};

/// A byte blob.
///
/// Unlike `Vec<u8>`, which is a sequence of `u8` elements, this goes through
/// [`crate::Encoder::encode_bytes`] and so opens no container.
#[derive(From, Into, Deref, DerefMut, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default, Debug)]
pub struct Bytes(pub Vec<u8>);

impl From<&[u8]> for Bytes {
    fn from(slice: &[u8]) -> Self {
        Self(slice.to_vec())
    }
}
