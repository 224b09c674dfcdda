//! Core AES-128 implementation for encryption and decryption of a 16 byte block.
//! Exports encrypt_block and decrypt_block, plus each round transformation on its own.

pub mod constants;
pub mod gf;
mod util;
mod decryption;
mod encryption;

pub use decryption::{
    decrypt_block, mix_columns_inv as inv_mix_columns, shift_rows_inv as inv_shift_rows,
    sub_bytes_inv as inv_sub_bytes,
};
pub use encryption::{encrypt_block, mix_columns, shift_rows, sub_bytes};
pub use util::{Block, add_round_key};
