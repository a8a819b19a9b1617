//! Fixtures and hash backends shared by the unit tests.

use crate::{ExtendedKey, PrivateKeyBytes, curve::Secp256k1Curve, master_key::PrivateMasterKeyDerivator};
use keytree_hashes::{Hash160, HashPrimitives, HmacSha512Output, Sha2Hashes, Sha256Output};

/// Seed of BIP32 test vector 1.
pub const SEED: &[u8] = &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f];

/// `n - 1` for secp256k1.
pub const ORDER_MINUS_ONE: PrivateKeyBytes = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48,
    0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x40,
];

/// Scalar with only the last byte set.
pub fn scalar(last: u8) -> PrivateKeyBytes {
    let mut bytes = [0u8; 32];
    bytes[31] = last;
    bytes
}

/// Private master key of [`SEED`].
pub fn master() -> ExtendedKey {
    PrivateMasterKeyDerivator::new(Secp256k1Curve, Sha2Hashes).private_master_key(SEED).unwrap()
}

/// Hash backend whose HMAC always returns the same output, to force undefined keys.
#[derive(Clone, Copy, Debug)]
pub struct FixedHmac(pub HmacSha512Output);

impl FixedHmac {
    /// HMAC output `tweak || 0x00..`, i.e. `I_L = tweak` and a zero chain code.
    pub fn with_tweak(tweak: PrivateKeyBytes) -> Self {
        let mut output = [0u8; 64];
        output[..32].copy_from_slice(&tweak);
        Self(output)
    }
}

impl HashPrimitives for FixedHmac {
    fn hmac_sha512(&self, _key: &[u8], _message: &[u8]) -> keytree_hashes::Result<HmacSha512Output> {
        Ok(self.0)
    }

    fn sha256(&self, data: &[u8]) -> Sha256Output {
        Sha2Hashes.sha256(data)
    }

    fn ripemd160(&self, data: &[u8]) -> Hash160 {
        Sha2Hashes.ripemd160(data)
    }
}

/// Hash backend whose HMAC rejects every key.
#[derive(Clone, Copy, Debug)]
pub struct RejectingHmac;

impl HashPrimitives for RejectingHmac {
    fn hmac_sha512(&self, key: &[u8], _message: &[u8]) -> keytree_hashes::Result<HmacSha512Output> {
        Err(keytree_hashes::Error::HmacKeyLength(key.len()))
    }

    fn sha256(&self, data: &[u8]) -> Sha256Output {
        Sha2Hashes.sha256(data)
    }

    fn ripemd160(&self, data: &[u8]) -> Hash160 {
        Sha2Hashes.ripemd160(data)
    }
}
