use super::constants::BLOCK_SIZE;
use super::gf::gf_mul;

/// A 16-byte block, also used as the cipher state.
///
/// The state is stored column-major: byte `i` sits at row `i % 4`, column `i / 4`.
pub type Block = [u8; BLOCK_SIZE];

/// Index of the byte at (`row`, `col`) in a column-major state.
#[inline(always)]
pub(crate) const fn idx(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// AddRoundKey step, used for both encryption and decryption. XOR is its own inverse.
#[inline(always)]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= *k;
    }
}

/// Multiplies every column of the state by `matrix` over GF(2^8).
#[inline(always)]
pub(crate) fn mix_with(state: &mut Block, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let i = idx(0, col);
        let column = [state[i], state[i + 1], state[i + 2], state[i + 3]];
        for (row, coeffs) in matrix.iter().enumerate() {
            state[i + row] = coeffs
                .iter()
                .zip(column)
                .fold(0, |acc, (&m, b)| acc ^ gf_mul(m, b));
        }
    }
}
