//! Error type.

use crate::KeyAccessControl;
use thiserror::Error;

/// Errors raised while deriving, serializing or encoding extended keys.
///
/// Every variant is a deterministic consequence of the input; none of them is
/// retried internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The seed produced a master scalar that is zero or not below the curve order.
    /// A different seed is required.
    #[error("seed produced an invalid master key")]
    InvalidMasterKey,

    /// The child scalar (or the resulting key) is invalid for this parent and index.
    /// A different index is required.
    #[error("child key at index {0} is invalid")]
    InvalidChildKey(u32),

    #[error("index {0} is already hardened")]
    IndexOutOfRange(u32),

    #[error("hardened index {0} cannot be derived from a public key")]
    HardenedDerivationUnsupported(u32),

    #[error("{access_control} key data must be {expected} bytes, got {actual}")]
    KeyDataSizeMismatch { access_control: KeyAccessControl, expected: usize, actual: usize },

    #[error("decoded key is {0} bytes, expected 82")]
    InvalidLength(usize),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("base58 decoding error: {0}")]
    Base58(String),

    #[error("unknown key version {0:#010x}")]
    UnknownVersion(u32),

    #[error("invalid key data: {0}")]
    InvalidKeyData(&'static str),

    #[error("root key must have a zero parent fingerprint and index")]
    InvalidRootAttributes,

    #[error("invalid derivation path: {0}")]
    DerivationPath(String),

    #[error("maximum derivation depth exceeded")]
    Depth,

    #[error("invalid scalar")]
    InvalidScalar,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error(transparent)]
    Hash(#[from] keytree_hashes::Error),
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Error {
        Error::Base58(err.to_string())
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Error {
        Error::DerivationPath(err.to_string())
    }
}

impl Error {
    /// Key material of `actual` bytes presented where `access_control` key data was required.
    pub(crate) fn key_data_size_mismatch(access_control: KeyAccessControl, actual: usize) -> Self {
        Error::KeyDataSizeMismatch { access_control, expected: access_control.key_size(), actual }
    }
}
