use super::constants::{NUM_ROUNDS, SBOX_INV};
use super::util::{Block, add_round_key, idx, mix_with};

/// Inverse MixColumns matrix.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Core AES-128 decryption function. Decrypts a 16 byte block using the 11 provided round keys.
#[inline(always)]
pub fn decrypt_block(ciphertext: &Block, round_keys: &[Block; NUM_ROUNDS + 1]) -> Block {
    let mut state = *ciphertext;

    add_round_key(&mut state, &round_keys[NUM_ROUNDS]);

    for round_key in round_keys[1..NUM_ROUNDS].iter().rev() {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, round_key);
        mix_columns_inv(&mut state);
    }

    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);
    add_round_key(&mut state, &round_keys[0]);

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub fn sub_bytes_inv(state: &mut Block) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// Inverse ShiftRows step. Row `r` is rotated right by `r` positions.
#[inline(always)]
pub fn shift_rows_inv(state: &mut Block) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[idx(row, col)] = s[idx(row, (col + 4 - row) & 3)];
        }
    }
}

/// Inverse MixColumns step.
#[inline(always)]
pub fn mix_columns_inv(state: &mut Block) {
    mix_with(state, &INV_MIX_MATRIX);
}
