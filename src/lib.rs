//! AES-128 (Rijndael) for a single 16-byte block.
//!
//! Whole-block [`encrypt_block`]/[`decrypt_block`] sit alongside each round
//! transformation ([`sub_bytes`], [`shift_rows`], [`mix_columns`], [`add_round_key`]
//! and their inverses) so every stage can be checked on its own. No modes of
//! operation, no padding, no constant-time guarantees.
//!
//! ```
//! # fn main() -> rijndael::Result<()> {
//! let key: [u8; 16] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
//!                       0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f];
//! let plaintext: [u8; 16] = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
//!                             0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
//!
//! let ciphertext = rijndael::encrypt_block(&plaintext, &key)?;
//! assert_eq!(&ciphertext[..4], &[0x69, 0xc4, 0xe0, 0xd8]);
//! assert_eq!(rijndael::decrypt_block(&ciphertext, &key)?, plaintext);
//! # Ok(())
//! # }
//! ```

mod rijndael;

pub use rijndael::{
    BLOCK_SIZE, Block, Cipher, EXPANDED_KEY_SIZE, Error, KEY_SIZE, Key, KeySchedule, NUM_ROUNDS,
    RCON, Result, SBOX, SBOX_INV, Transform, add_round_key, build_inverse_sbox, build_sbox,
    decrypt_block, encrypt_block, expand_key, gf_inverse, gf_mul, inv_mix_columns, inv_shift_rows,
    inv_sub_bytes, mix_columns, shift_rows, sub_bytes,
};
