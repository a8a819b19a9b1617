use crate::{Error, Hash160, HashPrimitives, HmacSha512Output, Result, Sha256Output};
use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

type HmacSha512 = Hmac<Sha512>;

/// [`HashPrimitives`] backed by the RustCrypto `sha2`, `ripemd` and `hmac` crates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha2Hashes;

impl HashPrimitives for Sha2Hashes {
    fn hmac_sha512(&self, key: &[u8], message: &[u8]) -> Result<HmacSha512Output> {
        let mut hmac = HmacSha512::new_from_slice(key).map_err(|_| Error::HmacKeyLength(key.len()))?;
        hmac.update(message);

        let mut result = hmac.finalize().into_bytes();
        let mut output = [0u8; 64];
        output.copy_from_slice(&result);
        result.as_mut_slice().zeroize();
        Ok(output)
    }

    fn sha256(&self, data: &[u8]) -> Sha256Output {
        Sha256::digest(data).into()
    }

    fn ripemd160(&self, data: &[u8]) -> Hash160 {
        Ripemd160::digest(data).into()
    }
}
