//!
//! Hash primitives consumed by key derivation and key serialization.
//!
//! [`HashPrimitives`] is the capability set the derivation engine is written
//! against; [`Sha2Hashes`] is the default RustCrypto backed implementation.
//!

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod hashers;

pub use error::Error;
pub use hashers::Sha2Hashes;

/// [`Result`] type alias bound to the crate [`Error`] enum.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Output size of HMAC-SHA512.
pub const HMAC_SHA512_SIZE: usize = 64;
/// Output size of SHA-256.
pub const SHA256_SIZE: usize = 32;
/// Output size of RIPEMD-160.
pub const RIPEMD160_SIZE: usize = 20;
/// Size of a Base58Check checksum.
pub const CHECKSUM_SIZE: usize = 4;

pub type HmacSha512Output = [u8; HMAC_SHA512_SIZE];
pub type Sha256Output = [u8; SHA256_SIZE];
pub type Hash160 = [u8; RIPEMD160_SIZE];
pub type Checksum = [u8; CHECKSUM_SIZE];

/// Hash functions required by BIP32 derivation and Base58Check encoding.
///
/// Implementors only supply the three primitive functions; the composite
/// hashes are provided in terms of them.
pub trait HashPrimitives {
    /// HMAC-SHA512 of `message` keyed with `key`.
    fn hmac_sha512(&self, key: &[u8], message: &[u8]) -> Result<HmacSha512Output>;

    fn sha256(&self, data: &[u8]) -> Sha256Output;

    fn ripemd160(&self, data: &[u8]) -> Hash160;

    /// `RIPEMD160(SHA256(data))`
    fn hash160(&self, data: &[u8]) -> Hash160 {
        self.ripemd160(&self.sha256(data))
    }

    /// `SHA256(SHA256(data))`
    fn double_sha256(&self, data: &[u8]) -> Sha256Output {
        self.sha256(&self.sha256(data))
    }

    /// First four bytes of `SHA256(SHA256(data))`.
    fn checksum(&self, data: &[u8]) -> Checksum {
        let digest = self.double_sha256(data);
        let mut checksum = [0u8; CHECKSUM_SIZE];
        checksum.copy_from_slice(&digest[..CHECKSUM_SIZE]);
        checksum
    }
}

impl<T: HashPrimitives + ?Sized> HashPrimitives for &T {
    fn hmac_sha512(&self, key: &[u8], message: &[u8]) -> Result<HmacSha512Output> {
        (**self).hmac_sha512(key, message)
    }

    fn sha256(&self, data: &[u8]) -> Sha256Output {
        (**self).sha256(data)
    }

    fn ripemd160(&self, data: &[u8]) -> Hash160 {
        (**self).ripemd160(data)
    }
}
