//! Child numbers and index hardening.

use crate::{Error, HARDENED_FLAG, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Index of a particular child key for a given (extended) private key.
///
/// The hardened status lives in the top bit of the raw value.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Size of a child number when encoded as bytes.
    pub const BYTE_SIZE: usize = 4;

    /// Create new [`ChildNumber`] with the given index and hardened flag.
    ///
    /// Returns an error if the index is already in the hardened range.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & HARDENED_FLAG != 0 {
            return Err(Error::IndexOutOfRange(index));
        }

        if hardened { Ok(Self(index | HARDENED_FLAG)) } else { Ok(Self(index)) }
    }

    /// Parse a child number from the byte encoding.
    pub fn from_bytes(bytes: [u8; Self::BYTE_SIZE]) -> Self {
        u32::from_be_bytes(bytes).into()
    }

    /// Serialize this child number as bytes.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        self.0.to_be_bytes()
    }

    /// Get the index number for this [`ChildNumber`], i.e. with the hardened bit cleared.
    pub fn index(self) -> u32 {
        self.0 & !HARDENED_FLAG
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        KeyIndexHardener.is_hardened(self.0)
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            f.write_str("'")?;
        }

        Ok(())
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        let (child, hardened) = match child.strip_suffix(['\'', 'h', 'H']) {
            Some(c) => (c, true),
            None => (child, false),
        };

        let index = child.parse::<u32>()?;
        ChildNumber::new(index, hardened)
    }
}

/// Maps normal child indices into the hardened range and back.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyIndexHardener;

impl KeyIndexHardener {
    pub fn new() -> Self {
        Self
    }

    /// `normal_index + 2^31`, failing with [`Error::IndexOutOfRange`] if the
    /// index is already hardened.
    pub fn hardened_index(&self, normal_index: u32) -> Result<u32> {
        if self.is_hardened(normal_index) {
            return Err(Error::IndexOutOfRange(normal_index));
        }
        Ok(normal_index | HARDENED_FLAG)
    }

    /// Inverse of [`hardened_index`](Self::hardened_index).
    pub fn normal_index(&self, hardened_index: u32) -> Result<u32> {
        if !self.is_hardened(hardened_index) {
            return Err(Error::IndexOutOfRange(hardened_index));
        }
        Ok(hardened_index & !HARDENED_FLAG)
    }

    /// `index >= 2^31`
    pub fn is_hardened(&self, index: u32) -> bool {
        index >= HARDENED_FLAG
    }
}
