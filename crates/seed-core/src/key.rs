//! Key types for SEED-128.

use std::fmt;

use crate::error::{check_key_len, SeedError};

/// SEED-128 key wrapper.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Seed128Key(pub [u8; 16]);

impl From<[u8; 16]> for Seed128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Seed128Key {
    type Error = SeedError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        check_key_len(value.len())?;
        let mut key = [0u8; 16];
        key.copy_from_slice(value);
        Ok(Self(key))
    }
}

impl fmt::Debug for Seed128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed128Key(..)")
    }
}

/// Expanded round keys for SEED-128: two 32-bit words per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [u32; 32]);

impl RoundKeys {
    /// Returns the key pair for the requested round (0..=15).
    #[inline]
    pub fn pair(&self, round: usize) -> (u32, u32) {
        (self.0[2 * round], self.0[2 * round + 1])
    }
}
