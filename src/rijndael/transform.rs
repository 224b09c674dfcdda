//! Round transformations addressable by name, for applying a single stage to a raw
//! 16-byte buffer and comparing it byte for byte against another implementation.

use std::fmt;

use crate::rijndael::cipher::to_block;
use crate::rijndael::core::{
    Block, add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::rijndael::error::{Error, Result};

/// One of the seven round transformations.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use rijndael::Transform;
///
/// let mut state = [0u8; 16];
/// Transform::from_name("sub_bytes", None)?.apply(&mut state)?;
/// assert_eq!(state, [0x63; 16]);
///
/// Transform::from_name("invert_sub_bytes", None)?.apply(&mut state)?;
/// assert_eq!(state, [0x00; 16]);
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Transform {
    SubBytes,
    InvSubBytes,
    ShiftRows,
    InvShiftRows,
    MixColumns,
    InvMixColumns,
    /// XOR with the contained round key.
    AddRoundKey(Block),
}

impl Transform {
    /// Looks up a transformation by name. `round_key` is only read for `add_round_key`,
    /// which requires it to be exactly 16 bytes.
    ///
    /// Inverse steps accept both the `inv_` and `invert_` prefix.
    pub fn from_name(name: &str, round_key: Option<&[u8]>) -> Result<Self> {
        Ok(match name {
            "sub_bytes" => Self::SubBytes,
            "inv_sub_bytes" | "invert_sub_bytes" => Self::InvSubBytes,
            "shift_rows" => Self::ShiftRows,
            "inv_shift_rows" | "invert_shift_rows" => Self::InvShiftRows,
            "mix_columns" => Self::MixColumns,
            "inv_mix_columns" | "invert_mix_columns" => Self::InvMixColumns,
            "add_round_key" => Self::AddRoundKey(to_block(round_key.unwrap_or(&[]))?),
            _ => {
                return Err(Error::UnknownTransform {
                    name: name.to_owned(),
                });
            }
        })
    }

    /// Canonical name of the transformation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubBytes => "sub_bytes",
            Self::InvSubBytes => "inv_sub_bytes",
            Self::ShiftRows => "shift_rows",
            Self::InvShiftRows => "inv_shift_rows",
            Self::MixColumns => "mix_columns",
            Self::InvMixColumns => "inv_mix_columns",
            Self::AddRoundKey(_) => "add_round_key",
        }
    }

    /// The transformation that undoes this one.
    pub fn inverse(&self) -> Self {
        match *self {
            Self::SubBytes => Self::InvSubBytes,
            Self::InvSubBytes => Self::SubBytes,
            Self::ShiftRows => Self::InvShiftRows,
            Self::InvShiftRows => Self::ShiftRows,
            Self::MixColumns => Self::InvMixColumns,
            Self::InvMixColumns => Self::MixColumns,
            Self::AddRoundKey(rk) => Self::AddRoundKey(rk),
        }
    }

    /// Applies the transformation to a 16-byte block.
    pub fn apply_block(&self, state: &mut Block) {
        match self {
            Self::SubBytes => sub_bytes(state),
            Self::InvSubBytes => inv_sub_bytes(state),
            Self::ShiftRows => shift_rows(state),
            Self::InvShiftRows => inv_shift_rows(state),
            Self::MixColumns => mix_columns(state),
            Self::InvMixColumns => inv_mix_columns(state),
            Self::AddRoundKey(rk) => add_round_key(state, rk),
        }
    }

    /// Applies the transformation in place to `state`, which must be exactly 16 bytes.
    /// On InvalidBlockLength the buffer is left untouched.
    pub fn apply(&self, state: &mut [u8]) -> Result<()> {
        let len = state.len();
        let block: &mut Block = state
            .try_into()
            .map_err(|_| Error::InvalidBlockLength { len })?;
        self.apply_block(block);
        Ok(())
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE: Block = [
        // col 0
        0x19, 0x3d, 0xe3, 0xbe,
        // col 1
        0xa0, 0xf4, 0xe2, 0x2b,
        // col 2
        0x9a, 0xc6, 0x8d, 0x2a,
        // col 3
        0xe9, 0xf8, 0x48, 0x08,
    ];

    const UNARY: [Transform; 6] = [
        Transform::SubBytes,
        Transform::InvSubBytes,
        Transform::ShiftRows,
        Transform::InvShiftRows,
        Transform::MixColumns,
        Transform::InvMixColumns,
    ];

    #[test]
    fn names_round_trip() -> Result<()> {
        for t in UNARY {
            assert_eq!(Transform::from_name(t.name(), None)?, t);
            assert_eq!(t.to_string(), t.name());
        }

        let rk = [0xaau8; 16];
        assert_eq!(
            Transform::from_name("add_round_key", Some(&rk[..]))?,
            Transform::AddRoundKey(rk)
        );
        Ok(())
    }

    #[test]
    fn invert_prefix_aliases() -> Result<()> {
        assert_eq!(Transform::from_name("invert_sub_bytes", None)?, Transform::InvSubBytes);
        assert_eq!(Transform::from_name("invert_shift_rows", None)?, Transform::InvShiftRows);
        assert_eq!(Transform::from_name("invert_mix_columns", None)?, Transform::InvMixColumns);
        Ok(())
    }

    #[test]
    fn unknown_name() {
        assert!(matches!(
            Transform::from_name("expand_key", None),
            Err(Error::UnknownTransform { name }) if name == "expand_key"
        ));
    }

    #[test]
    fn add_round_key_needs_a_full_key() {
        assert!(matches!(
            Transform::from_name("add_round_key", None),
            Err(Error::InvalidBlockLength { len: 0 })
        ));
        assert!(matches!(
            Transform::from_name("add_round_key", Some(&[0u8; 8][..])),
            Err(Error::InvalidBlockLength { len: 8 })
        ));
    }

    #[test]
    fn apply_matches_direct_call() -> Result<()> {
        let mut via_name = STATE;
        Transform::from_name("sub_bytes", None)?.apply(&mut via_name)?;

        let mut direct = STATE;
        sub_bytes(&mut direct);

        assert_eq!(via_name, direct);
        Ok(())
    }

    #[test]
    fn inverse_undoes_each_transform() -> Result<()> {
        let mut all = UNARY.to_vec();
        all.push(Transform::AddRoundKey([0x5cu8; 16]));

        for t in all {
            let mut state = STATE;
            t.apply(&mut state)?;
            t.inverse().apply(&mut state)?;
            assert_eq!(state, STATE, "{t} followed by its inverse changed the state");
        }
        Ok(())
    }

    #[test]
    fn apply_rejects_wrong_length_without_mutating() {
        let mut short = [0x11u8; 15];
        assert!(matches!(
            Transform::SubBytes.apply(&mut short),
            Err(Error::InvalidBlockLength { len: 15 })
        ));
        assert_eq!(short, [0x11u8; 15]);

        let mut long = vec![0x22u8; 17];
        assert!(Transform::MixColumns.apply(&mut long).is_err());
        assert!(long.iter().all(|&b| b == 0x22));
    }
}
