//! Bit string type shared by the entropy and mnemonic stages.

use std::str::FromStr;

/// An ordered sequence of bits, most significant first.
///
/// Entropy, checksum and their concatenation are all carried as
/// `BitString`. Displays as a string of `0` and `1`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Creates an empty bit string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bit string with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Creates a bit string of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Takes the first `bit_len` bits of `bytes`, MSB first.
    ///
    /// `bit_len` is capped at `bytes.len() * 8`.
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Self {
        let bit_len = bit_len.min(bytes.len() * 8);
        let bits = (0..bit_len)
            .map(|i| (bytes[i / 8] >> (7 - i % 8)) & 1 == 1)
            .collect();
        Self { bits }
    }

    /// Packs the bits into bytes, MSB first.
    ///
    /// A trailing partial byte is padded with zero bits.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | (u8::from(bit) << (7 - i)))
            })
            .collect()
    }

    /// Appends a bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends all bits of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Returns `self ‖ other` as a new bit string.
    pub fn concat(&self, other: &BitString) -> BitString {
        let mut out = BitString::with_capacity(self.len() + other.len());
        out.extend_from(self);
        out.extend_from(other);
        out
    }

    /// Keeps only the first `len` bits.
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Returns the bits as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterates over the bits.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Counts the number of set bits.
    pub fn popcount(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Calculates bit bias as deviation from 0.5.
    ///
    /// Returns a value in [-0.5, 0.5] where 0.0 is unbiased.
    pub fn bit_bias(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.popcount() as f64 / self.len() as f64) - 0.5
    }
}

/// Interprets a slice of bits as an unsigned big-endian integer.
pub fn bits_to_index(bits: &[bool]) -> usize {
    bits.iter()
        .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit))
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitString")
            .field("len", &self.bits.len())
            .field("bit_bias", &format!("{:.4}", self.bit_bias()))
            .finish()
    }
}

/// Error parsing a bit string from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bit character {found:?} at position {position}")]
pub struct ParseBitStringError {
    /// Offending character.
    pub found: char,
    /// Character offset.
    pub position: usize,
}

impl FromStr for BitString {
    type Err = ParseBitStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseBitStringError { found, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}
