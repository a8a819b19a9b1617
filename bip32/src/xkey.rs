//! Extended keys: key material paired with a chain code.

use crate::{ChainCode, KEY_SIZE, KeyAccessControl, PUBLIC_KEY_SIZE, PrivateKeyBytes, PublicKeyBytes};
use core::fmt::{self, Debug};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Raw key material of an [`ExtendedKey`].
#[derive(Clone)]
pub enum KeyData {
    /// 32-byte big-endian scalar in `[1, n - 1]`.
    Private(PrivateKeyBytes),
    /// 33-byte compressed SEC1 point.
    Public(PublicKeyBytes),
}

impl KeyData {
    pub fn access_control(&self) -> KeyAccessControl {
        match self {
            KeyData::Private(_) => KeyAccessControl::Private,
            KeyData::Public(_) => KeyAccessControl::Public,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            KeyData::Private(bytes) => bytes,
            KeyData::Public(bytes) => bytes,
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            KeyData::Private(_) => KEY_SIZE,
            KeyData::Public(_) => PUBLIC_KEY_SIZE,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, KeyData::Private(_))
    }
}

impl Zeroize for KeyData {
    fn zeroize(&mut self) {
        match self {
            KeyData::Private(bytes) => bytes.zeroize(),
            KeyData::Public(bytes) => bytes.zeroize(),
        }
    }
}

impl ConstantTimeEq for KeyData {
    fn ct_eq(&self, other: &Self) -> Choice {
        match (self, other) {
            (KeyData::Private(a), KeyData::Private(b)) => a.ct_eq(b),
            (KeyData::Public(a), KeyData::Public(b)) => a.ct_eq(b),
            _ => Choice::from(0),
        }
    }
}

/// A key and its chain code, as produced by the derivators.
///
/// Carries no lineage: depth, parent fingerprint and index are supplied as
/// [`ChildKeyAttributes`](crate::ChildKeyAttributes) at serialization time.
#[derive(Clone)]
pub struct ExtendedKey {
    /// Private scalar or compressed public point.
    pub key: KeyData,

    /// Chain code.
    pub chain_code: ChainCode,
}

impl ExtendedKey {
    pub fn new(key: KeyData, chain_code: ChainCode) -> Self {
        Self { key, chain_code }
    }

    pub fn private(key: PrivateKeyBytes, chain_code: ChainCode) -> Self {
        Self { key: KeyData::Private(key), chain_code }
    }

    pub fn public(key: PublicKeyBytes, chain_code: ChainCode) -> Self {
        Self { key: KeyData::Public(key), chain_code }
    }

    pub fn access_control(&self) -> KeyAccessControl {
        self.key.access_control()
    }

    /// Borrow the raw key bytes (32 for private keys, 33 for public keys).
    pub fn key_bytes(&self) -> &[u8] {
        self.key.as_bytes()
    }
}

impl ConstantTimeEq for ExtendedKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.key.ct_eq(&other.key) & self.chain_code.ct_eq(&other.chain_code)
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl PartialEq for ExtendedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedKey {}

impl Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ExtendedKey");
        match &self.key {
            KeyData::Private(_) => debug.field("key", &"..."),
            KeyData::Public(bytes) => debug.field("key", bytes),
        };
        debug.field("chain_code", &self.chain_code).finish()
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.key.zeroize();
        self.chain_code.zeroize();
    }
}
