/// A 128-bit integer as two 64-bit words.
///
/// On the wire, `low` precedes `high`, each little-endian.
/// A signed value is stored as its two's-complement bit pattern.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct WordPair {
    pub low: u64,
    pub high: u64,
}

impl WordPair {
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut buf = [0u8; 16];
        buf[..8].copy_from_slice(&self.low.to_le_bytes());
        buf[8..].copy_from_slice(&self.high.to_le_bytes());
        buf
    }

    pub fn from_le_bytes(buf: [u8; 16]) -> Self {
        let mut low = [0u8; 8];
        let mut high = [0u8; 8];
        low.copy_from_slice(&buf[..8]);
        high.copy_from_slice(&buf[8..]);
        Self {
            low: u64::from_le_bytes(low),
            high: u64::from_le_bytes(high),
        }
    }
}

impl From<u128> for WordPair {
    fn from(int: u128) -> Self {
        Self {
            low: int as u64,
            high: (int >> 64) as u64,
        }
    }
}
impl From<WordPair> for u128 {
    fn from(words: WordPair) -> Self {
        (u128::from(words.high) << 64) | u128::from(words.low)
    }
}

impl From<i128> for WordPair {
    fn from(int: i128) -> Self {
        Self::from(int as u128)
    }
}
impl From<WordPair> for i128 {
    fn from(words: WordPair) -> Self {
        u128::from(words) as i128
    }
}
