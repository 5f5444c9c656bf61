//! Error types for SEED key setup.

use std::fmt;

/// Errors produced when building a cipher from caller-supplied key bytes.
///
/// Both variants carry the offending length. Short buffers handed to
/// [`Seed128::encrypt`](crate::Seed128::encrypt) are not reported here; they
/// are caller bugs and panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    /// Key length is not 16 bytes.
    KeySize(usize),
    /// Key length belongs to another SEED variant (SEED-256) that is not implemented.
    UnsupportedKeySize(usize),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::KeySize(len) => write!(f, "invalid key size {}", len),
            SeedError::UnsupportedKeySize(len) => write!(f, "unsupported key size {}", len),
        }
    }
}

impl std::error::Error for SeedError {}

/// Maps a key length onto the error it produces, or `None` for 16 bytes.
pub(crate) fn check_key_len(len: usize) -> Result<(), SeedError> {
    match len {
        16 => Ok(()),
        32 => Err(SeedError::UnsupportedKeySize(len)),
        _ => Err(SeedError::KeySize(len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_key_size() {
        assert_eq!(SeedError::KeySize(7).to_string(), "invalid key size 7");
    }

    #[test]
    fn display_unsupported_key_size() {
        assert_eq!(
            SeedError::UnsupportedKeySize(32).to_string(),
            "unsupported key size 32"
        );
    }

    #[test]
    fn key_lengths_classified() {
        assert_eq!(check_key_len(16), Ok(()));
        assert_eq!(check_key_len(32), Err(SeedError::UnsupportedKeySize(32)));
        assert_eq!(check_key_len(0), Err(SeedError::KeySize(0)));
        assert_eq!(check_key_len(24), Err(SeedError::KeySize(24)));
    }
}
