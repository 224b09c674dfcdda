//! Defines the [`Key`] struct, which holds a valid 128-bit AES key, and the
//! [`KeySchedule`] it expands into.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rijndael::core::Block;
use crate::rijndael::core::constants::{EXPANDED_KEY_SIZE, KEY_SIZE, NUM_ROUNDS, RCON, SBOX};
use crate::rijndael::error::{Error, Result};

/// Contains a valid AES-128 key. Can be instantiated with a random key, or built from a slice
/// of exactly 16 bytes.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use rijndael::Key;
///
/// let random = Key::random()?;
/// assert_eq!(random.as_bytes().len(), 16);
///
/// let key_bytes: [u8; 16] = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///                            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
/// let key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(key.as_bytes(), &key_bytes);
///
/// // anything other than 16 bytes returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..15]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; KEY_SIZE],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn random() -> Result<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

/// The 11 round keys derived from a [`Key`]. Round 0 is the key itself.
///
/// Read-only once built, so a single schedule can be shared between threads.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct KeySchedule {
    round_keys: [Block; NUM_ROUNDS + 1],
}

impl KeySchedule {
    /// Round key `round` (0..=10).
    ///
    /// # Panics
    /// Panics if `round > 10`.
    pub fn round_key(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }

    /// All round keys in round order.
    pub fn round_keys(&self) -> &[Block; NUM_ROUNDS + 1] {
        &self.round_keys
    }

    /// Word `i` (0..44) of the expanded key.
    ///
    /// # Panics
    /// Panics if `i >= 44`.
    pub fn word(&self, i: usize) -> [u8; 4] {
        let rk = &self.round_keys[i / 4];
        let base = (i % 4) * 4;
        [rk[base], rk[base + 1], rk[base + 2], rk[base + 3]]
    }

    /// The expanded key as 176 bytes, round keys one after the other.
    pub fn to_bytes(&self) -> [u8; EXPANDED_KEY_SIZE] {
        let mut out = [0u8; EXPANDED_KEY_SIZE];
        for (chunk, rk) in out.chunks_exact_mut(16).zip(&self.round_keys) {
            chunk.copy_from_slice(rk);
        }
        out
    }
}

/// Expands a 128-bit key into 11 round keys.
///
/// Word 0 of each round is `sub_word(rot_word(prev[3])) ^ rcon ^ prev[0]`; words 1..4
/// are `prev[w] ^ this[w - 1]`.
pub fn expand_key(key: &Key) -> KeySchedule {
    let mut round_keys = [[0u8; 16]; NUM_ROUNDS + 1];
    round_keys[0] = key.bytes;

    for round in 1..=NUM_ROUNDS {
        let prev = round_keys[round - 1];
        let mut next = [0u8; 16];

        // rot_word, sub_word and rcon on the last word of the previous round key
        let temp = [
            SBOX[prev[13] as usize] ^ RCON[round - 1],
            SBOX[prev[14] as usize],
            SBOX[prev[15] as usize],
            SBOX[prev[12] as usize],
        ];
        for row in 0..4 {
            next[row] = prev[row] ^ temp[row];
        }

        for i in 4..16 {
            next[i] = prev[i] ^ next[i - 4];
        }

        round_keys[round] = next;
    }

    KeySchedule { round_keys }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_schedule_128() -> Result<()> {
        // run key schedule on 128 bit sample key from FIPS-197 Appendix A.1
        let key_128: [u8; 16] = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];

        let key = Key::try_from_slice(&key_128)?;
        let schedule = expand_key(&key);

        assert_eq!(schedule.round_key(0), &key_128);

        // w[4..8] from A.1
        let expected_first: [u8; 16] = [
            0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
            0x76, 0x05,
        ];
        assert_eq!(schedule.round_key(1), &expected_first);

        // compare with last round key of sample schedule in A.1
        let expected_last: [u8; 16] = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];
        assert_eq!(schedule.round_key(10), &expected_last);

        Ok(())
    }

    #[test]
    fn key_schedule_zero_key() {
        let schedule = expand_key(&Key::from([0u8; 16]));

        assert_eq!(
            schedule.round_key(1),
            &[
                0x62, 0x63, 0x63, 0x63, 0x62, 0x63, 0x63, 0x63, 0x62, 0x63, 0x63, 0x63, 0x62,
                0x63, 0x63, 0x63,
            ]
        );
        assert_eq!(
            schedule.round_key(10),
            &[
                0xb4, 0xef, 0x5b, 0xcb, 0x3e, 0x92, 0xe2, 0x11, 0x23, 0xe9, 0x51, 0xcf, 0x6f,
                0x8f, 0x18, 0x8e,
            ]
        );
    }

    #[test]
    fn key_schedule_is_deterministic() -> Result<()> {
        let key = Key::random()?;
        assert_eq!(expand_key(&key), expand_key(&key));
        Ok(())
    }

    #[test]
    fn words_and_bytes_agree() {
        let schedule = expand_key(&Key::from([
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]));
        let bytes = schedule.to_bytes();

        assert_eq!(bytes.len(), 176);
        for i in 0..44 {
            assert_eq!(schedule.word(i), bytes[i * 4..i * 4 + 4], "word {i}");
        }

        // w[43] from A.1
        assert_eq!(schedule.word(43), [0xb6, 0x63, 0x0c, 0xa6]);
    }

    #[test]
    fn invalid_key_lengths() {
        for len in [0usize, 1, 15, 17, 24, 32] {
            let bytes = vec![0u8; len];
            match Key::try_from_slice(&bytes) {
                Err(Error::InvalidKeyLength { len: got }) => assert_eq!(got, len),
                other => panic!("expected InvalidKeyLength for {len} bytes, got {other:?}"),
            }
        }
    }
}
