use crate::rijndael::core::{Block, decrypt_block as decrypt_with, encrypt_block as encrypt_with};
use crate::rijndael::error::{Error, Result};
use crate::rijndael::key::{Key, KeySchedule, expand_key};

/// Single-block AES-128 encryption and decryption.
/// Instantiated with a [Key], which is expanded into round keys once and stored in the instance.
///
/// A `Cipher` is immutable after construction, so one instance can be shared by reference
/// between threads encrypting independent blocks.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use rijndael::{Cipher, Key};
///
/// let cipher = Cipher::new(&Key::random()?);
/// let plaintext = *b"sixteen byte msg";
///
/// let ciphertext = cipher.encrypt_block(&plaintext)?;
/// assert_ne!(ciphertext, plaintext);
/// assert_eq!(cipher.decrypt_block(&ciphertext)?, plaintext);
///
/// // blocks must be exactly 16 bytes
/// assert!(cipher.encrypt_block(b"too short").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cipher {
    schedule: KeySchedule,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            schedule: expand_key(key),
        }
    }

    /// Getter for the internal key schedule.
    pub fn key_schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one 16-byte block. Returns an InvalidBlockLength error for any other length.
    pub fn encrypt_block(&self, plaintext: &[u8]) -> Result<Block> {
        let block = to_block(plaintext)?;
        Ok(encrypt_with(&block, self.schedule.round_keys()))
    }

    /// Decrypts one 16-byte block. Returns an InvalidBlockLength error for any other length.
    pub fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Block> {
        let block = to_block(ciphertext)?;
        Ok(decrypt_with(&block, self.schedule.round_keys()))
    }

    /// Encrypts `block` in place.
    pub fn encrypt_in_place(&self, block: &mut Block) {
        *block = encrypt_with(block, self.schedule.round_keys());
    }

    /// Decrypts `block` in place.
    pub fn decrypt_in_place(&self, block: &mut Block) {
        *block = decrypt_with(block, self.schedule.round_keys());
    }
}

/// Encrypts a single 16-byte block under a 16-byte key.
///
/// The key is validated before the block: a call with both lengths wrong
/// reports InvalidKeyLength.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Key::try_from_slice(key)?;
    Cipher::new(&key).encrypt_block(plaintext)
}

/// Decrypts a single 16-byte block under a 16-byte key.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Key::try_from_slice(key)?;
    Cipher::new(&key).decrypt_block(ciphertext)
}

pub(crate) fn to_block(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: bytes.len() })
}
