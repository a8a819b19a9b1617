//! Public key projection and public parent key to public child key derivation (CKDpub).

use crate::{
    ChainCode, Error, ExtendedKey, KEY_SIZE, KeyAccessControl, KeyData, PUBLIC_KEY_SIZE, PrivateKeyBytes, Result,
    child_number::KeyIndexHardener,
    curve::{CurvePrimitives, Secp256k1Curve},
};
use keytree_hashes::{HashPrimitives, Sha2Hashes};
use log::trace;
use zeroize::Zeroize;

#[derive(Clone, Copy, Debug, Default)]
pub struct PublicChildKeyDerivator<C = Secp256k1Curve, H = Sha2Hashes> {
    curve: C,
    hashes: H,
}

impl<C: CurvePrimitives, H: HashPrimitives> PublicChildKeyDerivator<C, H> {
    pub fn new(curve: C, hashes: H) -> Self {
        Self { curve, hashes }
    }

    /// Project a private extended key onto its public counterpart,
    /// `{ serP(point(k)), chain_code }`.
    ///
    /// Fails with [`Error::InvalidScalar`] unless `k` is in `[1, n - 1]`.
    pub fn public_key(&self, private_key: &ExtendedKey) -> Result<ExtendedKey> {
        let KeyData::Private(key) = &private_key.key else {
            return Err(Error::key_data_size_mismatch(KeyAccessControl::Private, private_key.key.len()));
        };

        if !self.curve.is_valid_scalar(key) {
            return Err(Error::InvalidScalar);
        }

        let point = self.curve.point_from_scalar(key)?;
        Ok(ExtendedKey::public(self.curve.compress(&point), private_key.chain_code))
    }

    /// Derive the public child of `public_parent_key` at a normal `index`.
    ///
    /// Hardened indices require the parent scalar and fail with
    /// [`Error::HardenedDerivationUnsupported`]. The child point is
    /// `point(I_L) + K`, which is `K` itself when `I_L == 0`. `I_L >= n` (or a
    /// child at infinity) fails with [`Error::InvalidChildKey`].
    pub fn public_child_key(&self, public_parent_key: &ExtendedKey, index: u32) -> Result<ExtendedKey> {
        let KeyData::Public(parent_key) = &public_parent_key.key else {
            return Err(Error::key_data_size_mismatch(KeyAccessControl::Public, public_parent_key.key.len()));
        };

        if KeyIndexHardener.is_hardened(index) {
            return Err(Error::HardenedDerivationUnsupported(index));
        }

        let parent_point = self.curve.point_from_bytes(parent_key)?;

        let mut data = [0u8; PUBLIC_KEY_SIZE + 4];
        data[..PUBLIC_KEY_SIZE].copy_from_slice(parent_key);
        data[PUBLIC_KEY_SIZE..].copy_from_slice(&index.to_be_bytes());

        let mut result = self.hashes.hmac_sha512(&public_parent_key.chain_code, &data)?;

        let mut tweak = PrivateKeyBytes::default();
        tweak.copy_from_slice(&result[..KEY_SIZE]);
        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(&result[KEY_SIZE..]);
        result.zeroize();

        let child_point = if tweak == [0u8; KEY_SIZE] {
            Ok(parent_point)
        } else {
            self.curve.point_from_scalar(&tweak).and_then(|tweak_point| self.curve.point_add(&tweak_point, &parent_point))
        };
        tweak.zeroize();

        match child_point {
            Ok(point) => Ok(ExtendedKey::public(self.curve.compress(&point), chain_code)),
            Err(_) => {
                trace!("public child key at index {index} is undefined");
                Err(Error::InvalidChildKey(index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        HARDENED_FLAG,
        private_child_key::PrivateChildKeyDerivator,
        testutils::{FixedHmac, ORDER_MINUS_ONE, RejectingHmac, master, scalar},
    };
    use faster_hex::hex_string;

    #[test]
    fn test_public_key_projection() {
        let derivator = PublicChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes);
        let master = master();
        let public = derivator.public_key(&master).unwrap();
        assert_eq!(public.access_control(), KeyAccessControl::Public);
        assert_eq!(hex_string(public.key_bytes()), "0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2");
        assert_eq!(public.chain_code, master.chain_code);

        assert_eq!(
            derivator.public_key(&public),
            Err(Error::KeyDataSizeMismatch { access_control: KeyAccessControl::Private, expected: 32, actual: 33 })
        );
    }

    #[test]
    fn test_public_child_matches_private_child() {
        let private = PrivateChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes);
        let public = PublicChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes);
        let parent = private.private_child_key(&master(), HARDENED_FLAG).unwrap();
        let public_parent = public.public_key(&parent).unwrap();

        for index in [0, 1, 2, 1_000_000_000, HARDENED_FLAG - 1] {
            let expected = public.public_key(&private.private_child_key(&parent, index).unwrap()).unwrap();
            let derived = public.public_child_key(&public_parent, index).unwrap();
            assert_eq!(derived, expected);
            assert!(matches!(derived.key_bytes()[0], 0x02 | 0x03));
            assert_eq!(derived.chain_code.len(), 32);
        }

        // m/0'/1
        let child = public.public_child_key(&public_parent, 1).unwrap();
        assert_eq!(hex_string(child.key_bytes()), "03501e454bf00751f24b1b489aa925215d66af2234e3891c3b21a52bedb3cd711c");
    }

    #[test]
    fn test_hardened_index_is_rejected() {
        let derivator = PublicChildKeyDerivator::<Secp256k1Curve, Sha2Hashes>::default();
        let public_master = derivator.public_key(&master()).unwrap();
        for index in [HARDENED_FLAG, HARDENED_FLAG + 2, u32::MAX] {
            assert_eq!(derivator.public_child_key(&public_master, index), Err(Error::HardenedDerivationUnsupported(index)));
        }

        assert_eq!(
            derivator.public_child_key(&master(), 0),
            Err(Error::KeyDataSizeMismatch { access_control: KeyAccessControl::Public, expected: 33, actual: 32 })
        );
    }

    #[test]
    fn test_invalid_parent_point() {
        let derivator = PublicChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes);
        let parent = ExtendedKey::public([0x05; 33], [0u8; 32]);
        assert_eq!(derivator.public_child_key(&parent, 0), Err(Error::InvalidPublicKey));
    }

    #[test]
    fn test_invalid_private_scalar() {
        let derivator = PublicChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes);
        let mut order = ORDER_MINUS_ONE;
        order[31] = 0x41;
        for key in [[0u8; 32], order] {
            assert_eq!(derivator.public_key(&ExtendedKey::private(key, [0u8; 32])), Err(Error::InvalidScalar));
        }
        assert_eq!(derivator.public_key(&ExtendedKey::private(scalar(1), [0u8; 32])).unwrap().key_bytes()[0], 0x02);
    }

    #[test]
    fn test_invalid_child_key() {
        let public_master = PublicChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes).public_key(&master()).unwrap();
        let derivator = PublicChildKeyDerivator::new(Secp256k1Curve, FixedHmac([0xFF; 64]));
        assert_eq!(derivator.public_child_key(&public_master, 3), Err(Error::InvalidChildKey(3)));
    }

    #[test]
    fn test_zero_tweak() {
        let public_master = PublicChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes).public_key(&master()).unwrap();
        let derivator = PublicChildKeyDerivator::new(Secp256k1Curve, FixedHmac::with_tweak([0u8; 32]));
        let child = derivator.public_child_key(&public_master, 4).unwrap();
        assert_eq!(child.key_bytes(), public_master.key_bytes());
        assert_eq!(child.chain_code, [0u8; 32]);

        // agrees with CKDpriv under the same tweak
        let private = PrivateChildKeyDerivator::new(Secp256k1Curve, FixedHmac::with_tweak([0u8; 32]));
        assert_eq!(derivator.public_key(&private.private_child_key(&master(), 4).unwrap()).unwrap(), child);
    }

    #[test]
    fn test_hash_backend_error() {
        let public_master = PublicChildKeyDerivator::new(Secp256k1Curve, Sha2Hashes).public_key(&master()).unwrap();
        let derivator = PublicChildKeyDerivator::new(Secp256k1Curve, RejectingHmac);
        assert_eq!(derivator.public_child_key(&public_master, 0), Err(Error::Hash(keytree_hashes::Error::HmacKeyLength(32))));
    }
}
