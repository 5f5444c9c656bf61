//! Block representation helpers.

/// SEED block of 16 bytes.
pub type Block = [u8; 16];

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Splits a block into four big-endian words.
#[inline]
pub(crate) fn load_words(block: &Block) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Joins four words back into a block, big-endian per word.
#[inline]
pub(crate) fn store_words(words: &[u32; 4]) -> Block {
    let mut block = [0u8; 16];
    for (chunk, word) in block.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    block
}
