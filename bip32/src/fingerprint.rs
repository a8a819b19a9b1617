use crate::{KeyFingerprint, PublicKeyBytes};
use keytree_hashes::{Hash160, HashPrimitives, Sha2Hashes};

/// Derives the 4-byte identity fingerprint linking a child key to its parent.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyFingerprintDerivator<H = Sha2Hashes> {
    hashes: H,
}

impl<H: HashPrimitives> KeyFingerprintDerivator<H> {
    pub fn new(hashes: H) -> Self {
        Self { hashes }
    }

    /// `HASH160(public_key)`, the full key identifier.
    pub fn identifier(&self, public_key: &PublicKeyBytes) -> Hash160 {
        self.hashes.hash160(public_key)
    }

    /// First four bytes of the key identifier.
    pub fn fingerprint(&self, public_key: &PublicKeyBytes) -> KeyFingerprint {
        let identifier = self.identifier(public_key);
        [identifier[0], identifier[1], identifier[2], identifier[3]]
    }
}
