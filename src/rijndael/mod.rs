mod cipher;
mod core;
mod error;
mod key;
mod transform;

pub use self::cipher::{Cipher, decrypt_block, encrypt_block};
pub use self::core::constants::{
    BLOCK_SIZE, EXPANDED_KEY_SIZE, KEY_SIZE, NUM_ROUNDS, RCON, SBOX, SBOX_INV, build_inverse_sbox,
    build_sbox,
};
pub use self::core::gf::{gf_inverse, gf_mul};
pub use self::core::{
    Block, add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use self::error::{Error, Result};
pub use self::key::{Key, KeySchedule, expand_key};
pub use self::transform::Transform;
