use crate::{Depth, KeyFingerprint, Version};
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Whether an extended key carries a private scalar or only a public point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "lowercase")]
#[borsh(use_discriminant = true)]
pub enum KeyAccessControl {
    Private = 0,
    Public = 1,
}

impl KeyAccessControl {
    /// Width of the raw key material for this access control.
    pub const fn key_size(self) -> usize {
        match self {
            KeyAccessControl::Private => crate::KEY_SIZE,
            KeyAccessControl::Public => crate::PUBLIC_KEY_SIZE,
        }
    }
}

impl fmt::Display for KeyAccessControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAccessControl::Private => f.write_str("private"),
            KeyAccessControl::Public => f.write_str("public"),
        }
    }
}

/// Lineage metadata attached to an [`ExtendedKey`](crate::ExtendedKey) when it is serialized.
///
/// Kept apart from the key itself so the same key material can be serialized
/// under different versions or re-rooted lineages.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct ChildKeyAttributes {
    /// Declared access control; must agree with the serialized key material.
    pub access_control: KeyAccessControl,

    /// Raw version prefix.
    pub version: u32,

    /// Depth in the key derivation hierarchy.
    pub depth: Depth,

    /// Parent fingerprint.
    pub parent_key_fingerprint: KeyFingerprint,

    /// Child number, hardened status in the top bit.
    pub index: u32,
}

impl ChildKeyAttributes {
    /// Attributes of a master key: depth 0, zero fingerprint and index.
    pub fn master(access_control: KeyAccessControl, version: Version) -> Self {
        Self { access_control, version: version.into(), depth: 0, parent_key_fingerprint: KeyFingerprint::default(), index: 0 }
    }

    pub fn is_master(&self) -> bool {
        self.depth == 0
    }
}
