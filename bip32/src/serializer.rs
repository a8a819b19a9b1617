//! Binary serialization of extended keys (the 78-byte BIP32 record).

use crate::{
    ChainCode, ChildKeyAttributes, Depth, Error, ExtendedKey, KEY_SIZE, KeyAccessControl, KeyData, KeyFingerprint,
    PUBLIC_KEY_SIZE, PrivateKeyBytes, PublicKeyBytes, Result, Version,
    curve::{CurvePrimitives, Secp256k1Curve},
};
use core::fmt::{self, Debug};
use zeroize::Zeroize;

/// A serialized extended key:
/// `version(4) || depth(1) || parent fingerprint(4) || child number(4) || chain code(32) || key data(33)`.
#[derive(Clone, PartialEq, Eq)]
pub struct SerializedKey([u8; SerializedKey::BYTE_SIZE]);

impl SerializedKey {
    /// Size of a serialized extended key, without checksum.
    pub const BYTE_SIZE: usize = 78;

    pub fn from_bytes(bytes: [u8; Self::BYTE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::BYTE_SIZE] {
        &self.0
    }

    pub fn version(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn depth(&self) -> Depth {
        self.0[4]
    }

    pub fn parent_fingerprint(&self) -> KeyFingerprint {
        [self.0[5], self.0[6], self.0[7], self.0[8]]
    }

    pub fn child_number(&self) -> u32 {
        u32::from_be_bytes([self.0[9], self.0[10], self.0[11], self.0[12]])
    }

    pub fn chain_code(&self) -> &[u8] {
        &self.0[13..45]
    }

    /// `0x00 || scalar` for private keys, the compressed point for public keys.
    pub fn key_data(&self) -> &[u8] {
        &self.0[45..78]
    }
}

impl AsRef<[u8]> for SerializedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SerializedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializedKey")
            .field("version", &format_args!("{:#010x}", self.version()))
            .field("depth", &self.depth())
            .field("parent_fingerprint", &self.parent_fingerprint())
            .field("child_number", &self.child_number())
            .finish_non_exhaustive()
    }
}

impl Drop for SerializedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Converts between an [`ExtendedKey`] with its [`ChildKeyAttributes`] and a [`SerializedKey`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KeySerializer<C = Secp256k1Curve> {
    curve: C,
}

impl<C: CurvePrimitives> KeySerializer<C> {
    pub fn new(curve: C) -> Self {
        Self { curve }
    }

    /// Lay out `extended_key` and `attributes` as a 78-byte record.
    ///
    /// The declared access control must match the key material: 32 bytes for
    /// private keys and 33 for public keys, otherwise
    /// [`Error::KeyDataSizeMismatch`] is returned. A private scalar outside
    /// `[1, n - 1]` fails with [`Error::InvalidScalar`] and a public key that is
    /// not a curve point with [`Error::InvalidPublicKey`]. The child number is
    /// written as given; its top bit is the hardened flag.
    pub fn serialized_key(&self, extended_key: &ExtendedKey, attributes: &ChildKeyAttributes) -> Result<SerializedKey> {
        let key = extended_key.key_bytes();
        if key.len() != attributes.access_control.key_size() {
            return Err(Error::key_data_size_mismatch(attributes.access_control, key.len()));
        }

        match &extended_key.key {
            KeyData::Private(scalar) if !self.curve.is_valid_scalar(scalar) => return Err(Error::InvalidScalar),
            KeyData::Public(point) => {
                self.curve.point_from_bytes(point)?;
            }
            KeyData::Private(_) => {}
        }

        let mut bytes = [0u8; SerializedKey::BYTE_SIZE];
        bytes[..4].copy_from_slice(&attributes.version.to_be_bytes());
        bytes[4] = attributes.depth;
        bytes[5..9].copy_from_slice(&attributes.parent_key_fingerprint);
        bytes[9..13].copy_from_slice(&attributes.index.to_be_bytes());
        bytes[13..45].copy_from_slice(&extended_key.chain_code);
        // Private key data carries a leading `0` byte
        bytes[78 - key.len()..].copy_from_slice(key);

        Ok(SerializedKey(bytes))
    }

    /// Inverse of [`serialized_key`](Self::serialized_key).
    ///
    /// The version must be one of the known prefixes, the key data must agree
    /// with the access control the version implies and be a valid scalar or
    /// point, and a depth-0 key must have a zero parent fingerprint and index.
    pub fn deserialized_key(&self, serialized_key: &SerializedKey) -> Result<(ExtendedKey, ChildKeyAttributes)> {
        let version = serialized_key.version();
        let (_, access_control) = Version::network_and_access(version).ok_or(Error::UnknownVersion(version))?;

        let attributes = ChildKeyAttributes {
            access_control,
            version,
            depth: serialized_key.depth(),
            parent_key_fingerprint: serialized_key.parent_fingerprint(),
            index: serialized_key.child_number(),
        };

        if attributes.is_master() && (attributes.parent_key_fingerprint != KeyFingerprint::default() || attributes.index != 0) {
            return Err(Error::InvalidRootAttributes);
        }

        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(serialized_key.chain_code());

        let key_data = serialized_key.key_data();
        let key = match access_control {
            KeyAccessControl::Private => {
                if key_data[0] != 0 {
                    return Err(Error::InvalidKeyData("private key data must start with a zero byte"));
                }
                let mut key = PrivateKeyBytes::default();
                key.copy_from_slice(&key_data[1..]);
                if !self.curve.is_valid_scalar(&key) {
                    key.zeroize();
                    return Err(Error::InvalidKeyData("private key is not a valid scalar"));
                }
                KeyData::Private(key)
            }
            KeyAccessControl::Public => {
                let mut key: PublicKeyBytes = [0u8; PUBLIC_KEY_SIZE];
                key.copy_from_slice(key_data);
                if !matches!(key[0], 0x02 | 0x03) || self.curve.point_from_bytes(&key).is_err() {
                    return Err(Error::InvalidKeyData("public key is not a valid compressed point"));
                }
                KeyData::Public(key)
            }
        };

        Ok((ExtendedKey::new(key, chain_code), attributes))
    }
}

const _: () = assert!(SerializedKey::BYTE_SIZE == 4 + 1 + 4 + 4 + KEY_SIZE + PUBLIC_KEY_SIZE);
