//! Behaviour of the public API as a downstream crate sees it.

use std::thread;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use seed_core::{
    decrypt_block, encrypt_block, expand_key, new_cipher, Seed128, Seed128Key, SeedError,
    BLOCK_SIZE, KEY_SIZE,
};

#[test]
fn known_answer_through_new_cipher() {
    let cipher = new_cipher(&[0u8; KEY_SIZE]).expect("key");
    let plain: [u8; 16] = core::array::from_fn(|i| i as u8);
    let mut ct = [0u8; BLOCK_SIZE];
    cipher.encrypt(&mut ct, &plain);
    assert_eq!(hex::encode(ct), "5ebac6e0054e166819aff1cc6d346cdb");
    let mut pt = [0u8; BLOCK_SIZE];
    cipher.decrypt(&mut pt, &ct);
    assert_eq!(pt, plain);
}

#[test]
fn key_size_errors_never_panic() {
    assert_eq!(new_cipher(&[]).unwrap_err(), SeedError::KeySize(0));
    assert_eq!(new_cipher(&[1u8; 24]).unwrap_err(), SeedError::KeySize(24));
    assert_eq!(
        new_cipher(&[1u8; 32]).unwrap_err(),
        SeedError::UnsupportedKeySize(32)
    );
    let err: Box<dyn std::error::Error> = Box::new(SeedError::KeySize(5));
    assert_eq!(err.to_string(), "invalid key size 5");
}

#[test]
fn encryption_is_deterministic() {
    let cipher = new_cipher(&[0x42u8; 16]).expect("key");
    let again = new_cipher(&[0x42u8; 16]).expect("key");
    let block = [0x24u8; 16];
    let mut first = [0u8; 16];
    let mut second = [0u8; 16];
    let mut third = [0u8; 16];
    cipher.encrypt(&mut first, &block);
    cipher.encrypt(&mut second, &block);
    again.encrypt(&mut third, &block);
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn instance_matches_free_functions() {
    let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
    for _ in 0..32 {
        let mut key = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);
        let cipher = Seed128::from_key(&Seed128Key::from(key));
        let rks = expand_key(&Seed128Key::from(key));
        let mut ct = [0u8; 16];
        cipher.encrypt(&mut ct, &block);
        assert_eq!(ct, encrypt_block(&block, &rks));
        assert_eq!(decrypt_block(&ct, &rks), block);
    }
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_instance_across_threads() {
    assert_send_sync::<Seed128>();

    let cipher = new_cipher(&[0x3cu8; 16]).expect("key");
    let blocks: Vec<[u8; 16]> = (0..64u8).map(|i| [i; 16]).collect();
    let serial: Vec<[u8; 16]> = blocks
        .iter()
        .map(|b| {
            let mut out = [0u8; 16];
            cipher.encrypt(&mut out, b);
            out
        })
        .collect();

    let parallel: Vec<[u8; 16]> = thread::scope(|scope| {
        let handles: Vec<_> = blocks
            .chunks(16)
            .map(|chunk| {
                let cipher = &cipher;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|b| {
                            let mut out = [0u8; 16];
                            cipher.encrypt(&mut out, b);
                            let mut back = [0u8; 16];
                            cipher.decrypt(&mut back, &out);
                            assert_eq!(&back, b);
                            out
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("worker thread"))
            .collect()
    });

    assert_eq!(serial, parallel);
}
