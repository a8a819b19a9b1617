//! Private parent key to private child key derivation (CKDpriv).

use crate::{
    ChainCode, Error, ExtendedKey, KEY_SIZE, KeyAccessControl, KeyData, PrivateKeyBytes, Result,
    child_number::KeyIndexHardener,
    curve::{CurvePrimitives, Secp256k1Curve},
};
use keytree_hashes::{HashPrimitives, Sha2Hashes};
use log::trace;
use zeroize::Zeroize;

#[derive(Clone, Copy, Debug, Default)]
pub struct PrivateChildKeyDerivator<C = Secp256k1Curve, H = Sha2Hashes> {
    curve: C,
    hashes: H,
}

impl<C: CurvePrimitives, H: HashPrimitives> PrivateChildKeyDerivator<C, H> {
    pub fn new(curve: C, hashes: H) -> Self {
        Self { curve, hashes }
    }

    /// Derive the private child of `private_parent_key` at `index`.
    ///
    /// The parent scalar must lie in `[1, n - 1]`, otherwise
    /// [`Error::InvalidScalar`] is returned before anything is hashed.
    /// Hardened indices hash `0x00 || ser256(k) || ser32(index)`, normal indices
    /// hash `serP(point(k)) || ser32(index)`, both keyed with the parent chain code.
    ///
    /// If `I_L >= n` or `(I_L + k) mod n == 0` the child is undefined and
    /// [`Error::InvalidChildKey`] is returned. The next index is never tried
    /// here; picking another index is up to the caller.
    pub fn private_child_key(&self, private_parent_key: &ExtendedKey, index: u32) -> Result<ExtendedKey> {
        let KeyData::Private(parent_key) = &private_parent_key.key else {
            return Err(Error::key_data_size_mismatch(KeyAccessControl::Private, private_parent_key.key.len()));
        };

        if !self.curve.is_valid_scalar(parent_key) {
            return Err(Error::InvalidScalar);
        }

        let mut data = [0u8; KEY_SIZE + 1 + 4];
        if KeyIndexHardener.is_hardened(index) {
            data[1..KEY_SIZE + 1].copy_from_slice(parent_key);
        } else {
            let parent_point = self.curve.point_from_scalar(parent_key)?;
            data[..KEY_SIZE + 1].copy_from_slice(&self.curve.compress(&parent_point));
        }
        data[KEY_SIZE + 1..].copy_from_slice(&index.to_be_bytes());

        let result = self.hashes.hmac_sha512(&private_parent_key.chain_code, &data);
        data.zeroize();
        let mut result = result?;

        let mut tweak = PrivateKeyBytes::default();
        tweak.copy_from_slice(&result[..KEY_SIZE]);
        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(&result[KEY_SIZE..]);
        result.zeroize();

        let child_key = self.curve.scalar_add(parent_key, &tweak);
        tweak.zeroize();

        match child_key {
            Ok(key) => Ok(ExtendedKey::private(key, chain_code)),
            Err(_) => {
                trace!("private child key at index {index} is undefined");
                Err(Error::InvalidChildKey(index))
            }
        }
    }
}
