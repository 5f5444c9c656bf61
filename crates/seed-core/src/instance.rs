//! The SEED-128 cipher instance and its RustCrypto block-cipher interface.

use core::fmt;

use cipher::consts::U16;
use cipher::{AlgorithmName, BlockCipher, Key, KeyInit, KeySizeUser};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::SeedError;
use crate::feistel::{decrypt_block, encrypt_block, expand_key};
use crate::key::{RoundKeys, Seed128Key};

/// Key size in bytes.
pub const KEY_SIZE: usize = 16;

/// SEED-128 block cipher keyed with a fixed round-key array.
///
/// Immutable after construction, so one instance can be shared across threads.
/// Implements [`BlockEncrypt`](cipher::BlockEncrypt) and
/// [`BlockDecrypt`](cipher::BlockDecrypt), which is what the RustCrypto mode
/// crates (`cbc`, `ctr`, `cfb-mode`, `ofb`, `aes-gcm`) expect.
#[derive(Clone)]
pub struct Seed128 {
    round_keys: RoundKeys,
}

/// Builds a cipher from raw key bytes.
///
/// 16-byte keys are accepted. 32-byte keys report
/// [`SeedError::UnsupportedKeySize`]; any other length reports
/// [`SeedError::KeySize`].
pub fn new_cipher(key: &[u8]) -> Result<Seed128, SeedError> {
    let key = Seed128Key::try_from(key)?;
    Ok(Seed128::from_key(&key))
}

impl Seed128 {
    /// Runs the key schedule for `key`.
    pub fn from_key(key: &Seed128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Block size in bytes, always 16.
    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Encrypts the first block of `src` into the first block of `dst`.
    ///
    /// `dst` and `src` cannot alias; encrypt in place through
    /// [`BlockEncrypt::encrypt_block`](cipher::BlockEncrypt::encrypt_block).
    ///
    /// # Panics
    ///
    /// Panics if either buffer is shorter than one block.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) {
        let input = input_block(src);
        let out = output_block(dst);
        out.copy_from_slice(&encrypt_block(&input, &self.round_keys));
    }

    /// Decrypts the first block of `src` into the first block of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if either buffer is shorter than one block.
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) {
        let input = input_block(src);
        let out = output_block(dst);
        out.copy_from_slice(&decrypt_block(&input, &self.round_keys));
    }
}

fn input_block(src: &[u8]) -> Block {
    assert!(src.len() >= BLOCK_SIZE, "seed: input not full block");
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&src[..BLOCK_SIZE]);
    block
}

fn output_block(dst: &mut [u8]) -> &mut [u8] {
    assert!(dst.len() >= BLOCK_SIZE, "seed: output not full block");
    &mut dst[..BLOCK_SIZE]
}

impl fmt::Debug for Seed128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed128 { .. }")
    }
}

impl KeySizeUser for Seed128 {
    type KeySize = U16;
}

impl KeyInit for Seed128 {
    fn new(key: &Key<Self>) -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(key);
        Self::from_key(&Seed128Key::from(bytes))
    }
}

impl AlgorithmName for Seed128 {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SEED")
    }
}

impl BlockCipher for Seed128 {}

cipher::impl_simple_block_encdec!(
    Seed128, U16, state, block,
    encrypt: {
        let mut input = [0u8; BLOCK_SIZE];
        input.copy_from_slice(block.get_in());
        let out = encrypt_block(&input, &state.round_keys);
        block.get_out().copy_from_slice(&out);
    }
    decrypt: {
        let mut input = [0u8; BLOCK_SIZE];
        input.copy_from_slice(block.get_in());
        let out = decrypt_block(&input, &state.round_keys);
        block.get_out().copy_from_slice(&out);
    }
);
