//! Command-line interface for `seed-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{AesGcm, Nonce};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use seed_core::cipher::block_padding::Pkcs7;
use seed_core::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, StreamCipher};
use seed_core::{new_cipher, Seed128, Seed128Key, BLOCK_SIZE};

type SeedCbcEnc = cbc::Encryptor<Seed128>;
type SeedCbcDec = cbc::Decryptor<Seed128>;
type SeedCtr = ctr::Ctr128BE<Seed128>;
type SeedGcm = AesGcm<Seed128, U12>;

/// SEED-128 CLI.
#[derive(Parser)]
#[command(name = "seed", version, author, about = "SEED-128 block cipher CLI (RFC 4269)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Mode of operation wrapped around the block cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Cipher-block chaining with PKCS#7 padding.
    Cbc,
    /// Counter mode with a 128-bit big-endian counter.
    Ctr,
    /// Galois/counter mode with a 96-bit nonce and 128-bit tag.
    Gcm,
}

impl Mode {
    /// Length of the IV or nonce written in front of the ciphertext.
    fn iv_len(self) -> usize {
        match self {
            Mode::Cbc | Mode::Ctr => BLOCK_SIZE,
            Mode::Gcm => 12,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file; the random IV/nonce is prepended to the output.
    Enc {
        /// Mode of operation.
        #[arg(long, value_enum, default_value_t = Mode::Gcm)]
        mode: Mode,
        /// SEED-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Associated data for GCM, as hex.
        #[arg(long, value_name = "HEX")]
        aad_hex: Option<String>,
        /// Optional RNG seed for a reproducible IV.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt a file produced by `enc`.
    Dec {
        /// Mode of operation used at encryption time.
        #[arg(long, value_enum, default_value_t = Mode::Gcm)]
        mode: Mode,
        /// SEED-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input ciphertext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Associated data for GCM, as hex.
        #[arg(long, value_name = "HEX")]
        aad_hex: Option<String>,
    },
    /// Verify the RFC 4269 known-answer vectors and random round trips.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and message, CBC encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

// RFC 4269, Appendix B: key, plaintext, ciphertext.
const KNOWN_ANSWERS: [(&str, &str, &str); 4] = [
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

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            mode,
            key_hex,
            input,
            output,
            aad_hex,
            seed,
        } => cmd_enc(mode, &key_hex, &input, &output, aad_hex.as_deref(), seed),
        Commands::Dec {
            mode,
            key_hex,
            input,
            output,
            aad_hex,
        } => cmd_dec(mode, &key_hex, &input, &output, aad_hex.as_deref()),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(
    mode: Mode,
    key_hex: &str,
    input_path: &Path,
    output_path: &Path,
    aad_hex: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let aad = parse_aad_hex(aad_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let mut iv = vec![0u8; mode.iv_len()];
    seeded_rng(seed).fill_bytes(&mut iv);
    let sealed = seal(mode, &key, &iv, &aad, &data)?;
    fs::write(output_path, sealed).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(
    mode: Mode,
    key_hex: &str,
    input_path: &Path,
    output_path: &Path,
    aad_hex: Option<&str>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let aad = parse_aad_hex(aad_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plain = open(mode, &key, &aad, &data)?;
    fs::write(output_path, plain).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, plain_hex, cipher_hex) in KNOWN_ANSWERS {
        let cipher = new_cipher(&hex::decode(key_hex)?)?;
        let plain = hex::decode(plain_hex)?;
        let mut out = [0u8; BLOCK_SIZE];
        cipher.encrypt(&mut out, &plain);
        if hex::encode(out) != cipher_hex {
            bail!("known-answer mismatch for key {}", key_hex);
        }
        let mut back = [0u8; BLOCK_SIZE];
        cipher.decrypt(&mut back, &out);
        if back[..] != plain[..] {
            bail!("known-answer decryption mismatch for key {}", key_hex);
        }
    }

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key_bytes = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        let key = Seed128Key::from(key_bytes);
        let mut message = vec![0u8; (rng.next_u32() % 256) as usize];
        rng.fill_bytes(&mut message);
        for mode in [Mode::Cbc, Mode::Ctr, Mode::Gcm] {
            let mut iv = vec![0u8; mode.iv_len()];
            rng.fill_bytes(&mut iv);
            let sealed = seal(mode, &key, &iv, &[], &message)?;
            if open(mode, &key, &[], &sealed)? != message {
                bail!("{:?} round trip failed", mode);
            }
        }
    }

    println!(
        "check passed: {} known-answer vectors, {} random samples",
        KNOWN_ANSWERS.len(),
        samples
    );
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Seed128Key::from(key_bytes);

    // Not block aligned, so padding is exercised.
    let mut message = [0u8; 37];
    rng.fill_bytes(&mut message);
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);

    let sealed = seal(Mode::Cbc, &key, &iv, &[], &message)?;
    let decrypted = open(Mode::Cbc, &key, &[], &sealed)?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(message));
    println!("ciphertext: {}", hex::encode(&sealed));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

/// Encrypts `data`, returning `iv || ciphertext`.
fn seal(mode: Mode, key: &Seed128Key, iv: &[u8], aad: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    if iv.len() != mode.iv_len() {
        bail!("{:?} needs a {}-byte IV", mode, mode.iv_len());
    }
    let body = match mode {
        Mode::Cbc => SeedCbcEnc::new_from_slices(&key.0, iv)
            .map_err(|_| anyhow!("invalid key or IV length"))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        Mode::Ctr => {
            let mut buf = data.to_vec();
            SeedCtr::new_from_slices(&key.0, iv)
                .map_err(|_| anyhow!("invalid key or IV length"))?
                .apply_keystream(&mut buf);
            buf
        }
        Mode::Gcm => SeedGcm::new(&key.0.into())
            .encrypt(Nonce::<U12>::from_slice(iv), Payload { msg: data, aad })
            .map_err(|_| anyhow!("GCM encryption failed"))?,
    };
    let mut out = Vec::with_capacity(iv.len() + body.len());
    out.extend_from_slice(iv);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Splits `iv || ciphertext` and decrypts it.
fn open(mode: Mode, key: &Seed128Key, aad: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < mode.iv_len() {
        bail!("input is shorter than the {}-byte IV", mode.iv_len());
    }
    let (iv, body) = data.split_at(mode.iv_len());
    match mode {
        Mode::Cbc => {
            if body.len() % BLOCK_SIZE != 0 {
                bail!("CBC ciphertext length must be a multiple of {} bytes", BLOCK_SIZE);
            }
            SeedCbcDec::new_from_slices(&key.0, iv)
                .map_err(|_| anyhow!("invalid key or IV length"))?
                .decrypt_padded_vec_mut::<Pkcs7>(body)
                .map_err(|_| anyhow!("invalid padding (wrong key or corrupted input)"))
        }
        Mode::Ctr => {
            let mut buf = body.to_vec();
            SeedCtr::new_from_slices(&key.0, iv)
                .map_err(|_| anyhow!("invalid key or IV length"))?
                .apply_keystream(&mut buf);
            Ok(buf)
        }
        Mode::Gcm => SeedGcm::new(&key.0.into())
            .decrypt(Nonce::<U12>::from_slice(iv), Payload { msg: body, aad })
            .map_err(|_| anyhow!("authentication failed (wrong key, AAD or corrupted input)")),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Seed128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    let key = Seed128Key::try_from(bytes.as_slice())
        .context("SEED-128 key must be 16 bytes (32 hex characters)")?;
    Ok(key)
}

fn parse_aad_hex(aad_hex: Option<&str>) -> Result<Vec<u8>> {
    match aad_hex {
        Some(value) => hex::decode(value.trim()).context("decode aad hex"),
        None => Ok(Vec::new()),
    }
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Seed128Key {
        parse_key_hex("000102030405060708090a0b0c0d0e0f").expect("key")
    }

    #[test]
    fn parse_key_hex_rejects_wrong_length() {
        let err = parse_key_hex("0001").unwrap_err();
        assert!(format!("{:#}", err).contains("invalid key size 2"));
        let err = parse_key_hex(&"00".repeat(32)).unwrap_err();
        assert!(format!("{:#}", err).contains("unsupported key size 32"));
        assert!(parse_key_hex("zz").is_err());
    }

    #[test]
    fn seal_open_round_trip_all_modes() {
        let key = key();
        let message = b"thirty-one bytes of plaintext!!";
        for mode in [Mode::Cbc, Mode::Ctr, Mode::Gcm] {
            let iv = vec![0x42u8; mode.iv_len()];
            let sealed = seal(mode, &key, &iv, b"ad", message).expect("seal");
            assert_eq!(&sealed[..iv.len()], &iv[..]);
            let opened = open(mode, &key, b"ad", &sealed).expect("open");
            assert_eq!(opened, message);
        }
    }

    #[test]
    fn ctr_matches_reference_ciphertext() {
        let iv: Vec<u8> = (0x10..0x20).collect();
        let sealed = seal(
            Mode::Ctr,
            &key(),
            &iv,
            &[],
            b"The quick brown fox jumps over the lazy dog",
        )
        .expect("seal");
        assert_eq!(
            hex::encode(&sealed[16..]),
            "1a0ee121ed0baad97a1e3c68a4d8354778adee00cfe48b65c311f84ff78e679c782b6d4c6ad5e0e8024a07"
        );
    }

    #[test]
    fn open_rejects_tampered_gcm() {
        let key = key();
        let iv = [7u8; 12];
        let mut sealed = seal(Mode::Gcm, &key, &iv, &[], b"payload").expect("seal");
        let last = sealed.len() - 1;
        sealed[last] ^= 0x80;
        assert!(open(Mode::Gcm, &key, &[], &sealed).is_err());
    }

    #[test]
    fn open_rejects_short_input() {
        assert!(open(Mode::Cbc, &key(), &[], &[0u8; 8]).is_err());
        assert!(open(Mode::Cbc, &key(), &[], &[0u8; 20]).is_err());
    }

    #[test]
    fn seal_rejects_wrong_iv_length() {
        assert!(seal(Mode::Gcm, &key(), &[0u8; 16], &[], b"x").is_err());
    }

    #[test]
    fn check_command_passes() {
        cmd_check(4, Some(1)).expect("self check");
    }
}
