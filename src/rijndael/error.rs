use thiserror::Error;
use rand::rand_core;

/// Rijndael Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Rijndael Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to use a key that is not exactly 128 bits.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Attempted to process a block, state, or round key that is not exactly 16 bytes.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },

    /// Looked up a transformation by a name that does not match any round transformation.
    #[error("unknown transformation: {name:?}")]
    UnknownTransform { name: String },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
