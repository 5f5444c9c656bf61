//! SEED-128 key schedule and block encryption/decryption.

use crate::block::{load_words, store_words, Block};
use crate::key::{RoundKeys, Seed128Key};
use crate::round::{f, g};
use crate::tables::KC;

const ROUNDS: usize = 16;

/// Expands a 128-bit key into 32 round-key words.
pub fn expand_key(key: &Seed128Key) -> RoundKeys {
    let [mut a, mut b, mut c, mut d] = load_words(&key.0);
    let mut rk = [0u32; 32];

    for (i, &kc) in KC.iter().enumerate() {
        rk[2 * i] = g(a.wrapping_add(c).wrapping_sub(kc));
        rk[2 * i + 1] = g(b.wrapping_sub(d).wrapping_add(kc));

        if i % 2 == 0 {
            let ab = ((u64::from(a) << 32) | u64::from(b)).rotate_right(8);
            a = (ab >> 32) as u32;
            b = ab as u32;
        } else {
            let cd = ((u64::from(c) << 32) | u64::from(d)).rotate_left(8);
            c = (cd >> 32) as u32;
            d = cd as u32;
        }
    }

    RoundKeys(rk)
}

fn feistel(block: &Block, round_keys: &RoundKeys, order: impl Iterator<Item = usize>) -> Block {
    let [mut l0, mut l1, mut r0, mut r1] = load_words(block);

    for (step, round) in order.enumerate() {
        let (k0, k1) = round_keys.pair(round);
        let (t0, t1) = f(r0, r1, k0, k1);
        l0 ^= t0;
        l1 ^= t1;
        // no swap after the last round
        if step != ROUNDS - 1 {
            core::mem::swap(&mut l0, &mut r0);
            core::mem::swap(&mut l1, &mut r1);
        }
    }

    store_words(&[l0, l1, r0, r1])
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    feistel(block, round_keys, 0..ROUNDS)
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    feistel(block, round_keys, (0..ROUNDS).rev())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    // RFC 4269, Appendix B.
    const VECTORS: [(&str, &str, &str); 4] = [
        (
            "00000000000000000000000000000000",
            "000102030405060708090a0b0c0d0e0f",
            "5ebac6e0054e166819aff1cc6d346cdb",
        ),
        (
            "000102030405060708090a0b0c0d0e0f",
            "00000000000000000000000000000000",
            "c11f22f20140505084483597e4370f43",
        ),
        (
            "4706480851e61be85d74bfb3fd956185",
            "83a2f8a288641fb9a4e9a5cc2f131c7d",
            "ee54d13ebcae706d226bc3142cd40d4a",
        ),
        (
            "28dbc3bc49ffd87dcfa509b11d422be7",
            "b41e6be2eba84a148e2eed84593c5ec7",
            "9b9b7bfcd1813cb95d0b3618f40f5122",
        ),
    ];

    fn block(hex_str: &str) -> Block {
        let mut out = [0u8; 16];
        hex::decode_to_slice(hex_str, &mut out).expect("valid hex block");
        out
    }

    #[test]
    fn key_schedule_matches_reference_round_keys() {
        let rks = expand_key(&Seed128Key::from([0u8; 16]));
        let expected: [u32; 32] = [
            0x7c8f8c7e, 0xc737a22c, 0xff276cdb, 0xa7ca684a, 0x2f9d01a1, 0x70049e41, 0xae59b3c4,
            0x4245e90c, 0xa1d6400f, 0xdbc1394e, 0x85963508, 0x0c5f1fcb, 0xb684bda7, 0x61a4aeae,
            0xd17e0741, 0xfee90aa1, 0x76cc05d5, 0xe97a7394, 0x50ac6f92, 0x1b2666e5, 0x65b7904a,
            0x8ec3a7b3, 0x2f7e2e22, 0xa2b121b9, 0x4d0bfde4, 0x4e888d9b, 0x631c8ddc, 0x4378a6c4,
            0x216af65f, 0x7878c031, 0x71891150, 0x98b255b0,
        ];
        assert_eq!(rks.0, expected);
    }

    #[test]
    fn key_schedule_is_deterministic() {
        let key = Seed128Key::from(block("4706480851e61be85d74bfb3fd956185"));
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn encrypt_matches_rfc_vectors() {
        for (key, plain, cipher) in VECTORS {
            let rks = expand_key(&Seed128Key::from(block(key)));
            assert_eq!(encrypt_block(&block(plain), &rks), block(cipher), "key {}", key);
        }
    }

    #[test]
    fn decrypt_matches_rfc_vectors() {
        for (key, plain, cipher) in VECTORS {
            let rks = expand_key(&Seed128Key::from(block(key)));
            assert_eq!(decrypt_block(&block(cipher), &rks), block(plain), "key {}", key);
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let rks = expand_key(&Seed128Key::from(key_bytes));
            let ct = encrypt_block(&block, &rks);
            assert_ne!(ct, block);
            assert_eq!(decrypt_block(&ct, &rks), block);
        }
    }
}
