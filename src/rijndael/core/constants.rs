//! Substitution tables and round constants, all evaluated at compile time.

use super::gf::{dbl, gf_inverse};

/// Size of a block (and of the state) in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for a 128-bit key.
pub const NUM_ROUNDS: usize = 10;

/// Size of the expanded key in bytes: one round key per round, plus the initial key.
pub const EXPANDED_KEY_SIZE: usize = BLOCK_SIZE * (NUM_ROUNDS + 1);

/// Constant added by the S-box affine transformation.
const AFFINE_CONSTANT: u8 = 0x63;

/// Forward S-box.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box.
pub const SBOX_INV: [u8; 256] = build_inverse_sbox(&SBOX);

/// Round constants for the key schedule, `RCON[r - 1]` is used for round `r`.
pub const RCON: [u8; NUM_ROUNDS] = build_rcon();

/// Builds the forward S-box: multiplicative inverse of each byte (0 maps to 0)
/// followed by the affine transformation over GF(2).
pub const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let inv = gf_inverse(i as u8);
        sbox[i] = inv
            ^ inv.rotate_left(1)
            ^ inv.rotate_left(2)
            ^ inv.rotate_left(3)
            ^ inv.rotate_left(4)
            ^ AFFINE_CONSTANT;
        i += 1;
    }
    sbox
}

/// Builds the inverse permutation of `sbox`, so that `inv[sbox[x]] == x`.
pub const fn build_inverse_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

/// Successive powers of x in GF(2^8), starting at 0x01.
pub const fn build_rcon() -> [u8; NUM_ROUNDS] {
    let mut rcon = [0u8; NUM_ROUNDS];
    let mut rc = 0x01u8;
    let mut i = 0;
    while i < NUM_ROUNDS {
        rcon[i] = rc;
        rc = dbl(rc);
        i += 1;
    }
    rcon
}
