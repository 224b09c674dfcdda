use super::constants::{NUM_ROUNDS, SBOX};
use super::util::{Block, add_round_key, idx, mix_with};

/// MixColumns matrix.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Core AES-128 encryption function. Encrypts a 16 byte block using the 11 provided round keys.
#[inline(always)]
pub fn encrypt_block(plaintext: &Block, round_keys: &[Block; NUM_ROUNDS + 1]) -> Block {
    let mut state = *plaintext;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..NUM_ROUNDS] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[NUM_ROUNDS]);

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub fn sub_bytes(state: &mut Block) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step.
/// Row `r` is rotated left by `r` positions; row 0 does not change.
/// [
///     01 02 03 04   ---->   01 02 03 04
///     05 06 07 08   ---->   06 07 08 05
///     09 10 11 12   ---->   11 12 09 10
///     13 14 15 16   ---->   16 13 14 15
/// ]
#[inline(always)]
pub fn shift_rows(state: &mut Block) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[idx(row, col)] = s[idx(row, (col + row) & 3)];
        }
    }
}

/// MixColumns step. Each column is multiplied by a constant matrix using Galois field multiplication.
#[inline(always)]
pub fn mix_columns(state: &mut Block) {
    mix_with(state, &MIX_MATRIX);
}
