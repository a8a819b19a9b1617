//! Master key generation from a seed.

use crate::{
    ChainCode, Error, ExtendedKey, KEY_SIZE, PrivateKeyBytes, Result,
    curve::{CurvePrimitives, Secp256k1Curve},
    public_child_key::PublicChildKeyDerivator,
};
use keytree_hashes::{HashPrimitives, Sha2Hashes};
use log::{debug, trace};
use zeroize::Zeroize;

/// HMAC key used to derive master keys.
const BIP32_DOMAIN_SEPARATOR: &[u8] = b"Bitcoin seed";

/// Derives the private master key (`m`) of a key tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrivateMasterKeyDerivator<C = Secp256k1Curve, H = Sha2Hashes> {
    curve: C,
    hashes: H,
}

impl<C: CurvePrimitives, H: HashPrimitives> PrivateMasterKeyDerivator<C, H> {
    pub fn new(curve: C, hashes: H) -> Self {
        Self { curve, hashes }
    }

    /// `I = HMAC-SHA512("Bitcoin seed", seed)`; the master key is `I[..32]`
    /// and the chain code `I[32..]`.
    ///
    /// Fails with [`Error::InvalidMasterKey`] when `I[..32]` is zero or not
    /// below the curve order. The seed is not modified and no retry is made.
    pub fn private_master_key<S>(&self, seed: S) -> Result<ExtendedKey>
    where
        S: AsRef<[u8]>,
    {
        let seed = seed.as_ref();
        if !(16..=64).contains(&seed.len()) {
            debug!("deriving master key from a {}-byte seed, outside the usual 16..=64 range", seed.len());
        }

        let mut result = self.hashes.hmac_sha512(BIP32_DOMAIN_SEPARATOR, seed)?;
        let (secret_key, chain_code) = result.split_at(KEY_SIZE);

        let mut key = PrivateKeyBytes::default();
        key.copy_from_slice(secret_key);
        let mut code = ChainCode::default();
        code.copy_from_slice(chain_code);
        result.zeroize();

        if !self.curve.is_valid_scalar(&key) {
            key.zeroize();
            trace!("master scalar out of range");
            return Err(Error::InvalidMasterKey);
        }

        Ok(ExtendedKey::private(key, code))
    }
}

/// Derives the public master key (`M`) of a key tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct PublicMasterKeyDerivator<C = Secp256k1Curve, H = Sha2Hashes> {
    master: PrivateMasterKeyDerivator<C, H>,
    public: PublicChildKeyDerivator<C, H>,
}

impl<C: CurvePrimitives + Clone, H: HashPrimitives + Clone> PublicMasterKeyDerivator<C, H> {
    pub fn new(curve: C, hashes: H) -> Self {
        Self {
            master: PrivateMasterKeyDerivator::new(curve.clone(), hashes.clone()),
            public: PublicChildKeyDerivator::new(curve, hashes),
        }
    }
}

impl<C: CurvePrimitives, H: HashPrimitives> PublicMasterKeyDerivator<C, H> {
    /// The private master key projected to its public point; the chain code is unchanged.
    pub fn public_master_key<S>(&self, seed: S) -> Result<ExtendedKey>
    where
        S: AsRef<[u8]>,
    {
        let private_master_key = self.master.private_master_key(seed)?;
        self.public.public_key(&private_master_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        KeyAccessControl, KeyData,
        testutils::{FixedHmac, RejectingHmac, SEED},
    };
    use faster_hex::{hex_decode, hex_string};

    #[test]
    fn test_private_master_key() {
        let master = PrivateMasterKeyDerivator::<Secp256k1Curve, Sha2Hashes>::default().private_master_key(SEED).unwrap();
        assert_eq!(master.access_control(), KeyAccessControl::Private);
        assert_eq!(hex_string(master.key_bytes()), "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35");
        assert_eq!(hex_string(&master.chain_code), "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508");
    }

    #[test]
    fn test_public_master_key() {
        let master = PublicMasterKeyDerivator::new(Secp256k1Curve, Sha2Hashes).public_master_key(SEED).unwrap();
        let KeyData::Public(key) = &master.key else { panic!("expected a public key") };
        assert_eq!(hex_string(key), "0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2");
        assert_eq!(hex_string(&master.chain_code), "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508");
    }

    #[test]
    fn test_master_key_is_deterministic() {
        let derivator = PrivateMasterKeyDerivator::new(Secp256k1Curve, Sha2Hashes);
        let mut seed = [0u8; 64];
        hex_decode(
            b"fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a29f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542",
            &mut seed,
        )
        .unwrap();
        assert_eq!(derivator.private_master_key(seed).unwrap(), derivator.private_master_key(seed.to_vec()).unwrap());
        assert_ne!(derivator.private_master_key(seed).unwrap(), derivator.private_master_key(SEED).unwrap());
    }

    #[test]
    fn test_invalid_master_key() {
        // I_L == 0
        let zero = PrivateMasterKeyDerivator::new(Secp256k1Curve, FixedHmac([0u8; 64]));
        assert_eq!(zero.private_master_key(SEED), Err(Error::InvalidMasterKey));

        // I_L >= n
        let overflow = PrivateMasterKeyDerivator::new(Secp256k1Curve, FixedHmac([0xFF; 64]));
        assert_eq!(overflow.private_master_key(SEED), Err(Error::InvalidMasterKey));

        let public = PublicMasterKeyDerivator::new(Secp256k1Curve, FixedHmac([0xFF; 64]));
        assert_eq!(public.public_master_key(SEED), Err(Error::InvalidMasterKey));
    }

    #[test]
    fn test_hash_backend_error() {
        let derivator = PrivateMasterKeyDerivator::new(Secp256k1Curve, RejectingHmac);
        assert_eq!(derivator.private_master_key(SEED), Err(Error::Hash(keytree_hashes::Error::HmacKeyLength(12))));
    }
}
