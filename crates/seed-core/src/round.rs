//! SEED round transformations.

use crate::tables::{SS0, SS1, SS2, SS3};

/// The G function: one lookup per byte lane, XORed together.
#[inline]
pub fn g(x: u32) -> u32 {
    SS0[(x & 0xff) as usize]
        ^ SS1[((x >> 8) & 0xff) as usize]
        ^ SS2[((x >> 16) & 0xff) as usize]
        ^ SS3[(x >> 24) as usize]
}

/// The round function F applied to the right half `(r0, r1)` with the round
/// key pair `(k0, k1)`.
///
/// Three G layers separated by modular additions; the returned pair is XORed
/// into the left half by the caller.
#[inline]
pub fn f(r0: u32, r1: u32, k0: u32, k1: u32) -> (u32, u32) {
    let mut t0 = r0 ^ k0;
    let mut t1 = r1 ^ k1;
    t1 = g(t0 ^ t1);
    t0 = g(t0.wrapping_add(t1));
    t1 = g(t1.wrapping_add(t0));
    t0 = t0.wrapping_add(t1);
    (t0, t1)
}
