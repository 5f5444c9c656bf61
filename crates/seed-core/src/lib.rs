//! SEED-128 block cipher (KISA, RFC 4269).
//!
//! This crate provides:
//! - The round-key schedule deriving 32 round-key words from a 128-bit key.
//! - Single-block encryption and decryption through the 16-round Feistel network.
//! - [`Seed128`], a cipher instance implementing the RustCrypto `cipher`
//!   traits so that external mode crates (CBC, CTR, CFB, OFB, GCM) can wrap it.
//!
//! Modes of operation are deliberately not implemented here.
//!
//! The G function is table driven; lookups are indexed by secret data, so the
//! implementation should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod error;
mod feistel;
mod instance;
mod key;
mod round;
mod tables;

pub use cipher;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::error::SeedError;
pub use crate::feistel::{decrypt_block, encrypt_block, expand_key};
pub use crate::instance::{new_cipher, Seed128, KEY_SIZE};
pub use crate::key::{RoundKeys, Seed128Key};
