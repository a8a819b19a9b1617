//! Base58Check text encoding of serialized keys.

use crate::{Error, Result, SerializedKey};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use keytree_hashes::{CHECKSUM_SIZE, HashPrimitives, Sha2Hashes};
use log::debug;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Size of a serialized key with its 4-byte checksum.
pub const ENCODED_KEY_SIZE: usize = SerializedKey::BYTE_SIZE + CHECKSUM_SIZE;

/// Encodes a [`SerializedKey`] as Base58Check text and decodes it back.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerializedKeyCoder<H = Sha2Hashes> {
    hashes: H,
}

impl<H: HashPrimitives> SerializedKeyCoder<H> {
    pub fn new(hashes: H) -> Self {
        Self { hashes }
    }

    /// Base58 (bitcoin alphabet) of `payload || SHA256(SHA256(payload))[..4]`.
    ///
    /// Leading zero bytes map one-to-one onto leading `1` characters.
    pub fn encode(&self, serialized_key: &SerializedKey) -> String {
        let mut bytes = [0u8; ENCODED_KEY_SIZE];
        bytes[..SerializedKey::BYTE_SIZE].copy_from_slice(serialized_key.as_bytes());
        bytes[SerializedKey::BYTE_SIZE..].copy_from_slice(&self.hashes.checksum(serialized_key.as_bytes()));

        let encoded = bs58::encode(&bytes).into_string();
        bytes.zeroize();
        encoded
    }

    /// Decode Base58Check text into a [`SerializedKey`].
    ///
    /// Fails with [`Error::InvalidLength`] unless the text decodes to exactly
    /// 82 bytes; anything longer is reported as 83. Fails with
    /// [`Error::ChecksumMismatch`] if the trailing four bytes are not the
    /// checksum of the payload.
    pub fn decode(&self, encoded: &str) -> Result<SerializedKey> {
        let mut bytes = [0u8; ENCODED_KEY_SIZE + 1];
        let len = match bs58::decode(encoded).onto(&mut bytes) {
            Ok(len) => len,
            Err(bs58::decode::Error::BufferTooSmall) => ENCODED_KEY_SIZE + 1,
            Err(err) => {
                bytes.zeroize();
                return Err(err.into());
            }
        };

        if len != ENCODED_KEY_SIZE {
            bytes.zeroize();
            debug!("rejecting encoded key of {len} bytes");
            return Err(Error::InvalidLength(len));
        }

        let (payload, checksum) = bytes[..ENCODED_KEY_SIZE].split_at(SerializedKey::BYTE_SIZE);
        let expected = self.hashes.checksum(payload);
        let valid: bool = expected[..].ct_eq(checksum).into();
        if !valid {
            bytes.zeroize();
            debug!("rejecting encoded key with a bad checksum");
            return Err(Error::ChecksumMismatch);
        }

        let mut key = [0u8; SerializedKey::BYTE_SIZE];
        key.copy_from_slice(payload);
        bytes.zeroize();
        let serialized_key = SerializedKey::from_bytes(key);
        key.zeroize();

        Ok(serialized_key)
    }
}

impl Display for SerializedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SerializedKeyCoder::new(Sha2Hashes).encode(self))
    }
}

impl FromStr for SerializedKey {
    type Err = Error;

    fn from_str(encoded: &str) -> Result<Self> {
        SerializedKeyCoder::new(Sha2Hashes).decode(encoded)
    }
}
