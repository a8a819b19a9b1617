//!
//! Elliptic curve capability consumed by the derivators.
//!
//! The derivators only reach curve arithmetic through [`CurvePrimitives`].
//!

use crate::{Error, PrivateKeyBytes, PublicKeyBytes, Result};
use secp256k1::{PublicKey, Scalar, SecretKey};

/// Scalar and point operations over a curve of prime order `n`.
pub trait CurvePrimitives {
    /// Curve point as represented by the backend.
    type Point: Clone;

    /// `true` if `scalar` is in `[1, n - 1]`.
    fn is_valid_scalar(&self, scalar: &PrivateKeyBytes) -> bool;

    /// `(a + b) mod n`, where `a` is a valid scalar and `b < n`.
    ///
    /// Fails with [`Error::InvalidScalar`] if either operand is out of range
    /// or the sum is zero.
    fn scalar_add(&self, a: &PrivateKeyBytes, b: &PrivateKeyBytes) -> Result<PrivateKeyBytes>;

    /// `scalar * G`
    fn point_from_scalar(&self, scalar: &PrivateKeyBytes) -> Result<Self::Point>;

    /// Parse a compressed SEC1 point.
    fn point_from_bytes(&self, bytes: &PublicKeyBytes) -> Result<Self::Point>;

    /// `a + b`, failing with [`Error::InvalidPublicKey`] on the point at infinity.
    fn point_add(&self, a: &Self::Point, b: &Self::Point) -> Result<Self::Point>;

    /// Compressed SEC1 encoding (`0x02`/`0x03` followed by the X coordinate).
    fn compress(&self, point: &Self::Point) -> PublicKeyBytes;
}

impl<T: CurvePrimitives + ?Sized> CurvePrimitives for &T {
    type Point = T::Point;

    fn is_valid_scalar(&self, scalar: &PrivateKeyBytes) -> bool {
        (**self).is_valid_scalar(scalar)
    }

    fn scalar_add(&self, a: &PrivateKeyBytes, b: &PrivateKeyBytes) -> Result<PrivateKeyBytes> {
        (**self).scalar_add(a, b)
    }

    fn point_from_scalar(&self, scalar: &PrivateKeyBytes) -> Result<Self::Point> {
        (**self).point_from_scalar(scalar)
    }

    fn point_from_bytes(&self, bytes: &PublicKeyBytes) -> Result<Self::Point> {
        (**self).point_from_bytes(bytes)
    }

    fn point_add(&self, a: &Self::Point, b: &Self::Point) -> Result<Self::Point> {
        (**self).point_add(a, b)
    }

    fn compress(&self, point: &Self::Point) -> PublicKeyBytes {
        (**self).compress(point)
    }
}

/// [`CurvePrimitives`] for secp256k1 backed by `libsecp256k1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Secp256k1Curve;

impl CurvePrimitives for Secp256k1Curve {
    type Point = PublicKey;

    fn is_valid_scalar(&self, scalar: &PrivateKeyBytes) -> bool {
        SecretKey::from_slice(scalar).is_ok()
    }

    fn scalar_add(&self, a: &PrivateKeyBytes, b: &PrivateKeyBytes) -> Result<PrivateKeyBytes> {
        let secret_key = SecretKey::from_slice(a).map_err(|_| Error::InvalidScalar)?;
        let tweak = Scalar::from_be_bytes(*b).map_err(|_| Error::InvalidScalar)?;
        let sum = secret_key.add_tweak(&tweak).map_err(|_| Error::InvalidScalar)?;
        Ok(sum.secret_bytes())
    }

    fn point_from_scalar(&self, scalar: &PrivateKeyBytes) -> Result<PublicKey> {
        let secret_key = SecretKey::from_slice(scalar).map_err(|_| Error::InvalidScalar)?;
        Ok(PublicKey::from_secret_key_global(&secret_key))
    }

    fn point_from_bytes(&self, bytes: &PublicKeyBytes) -> Result<PublicKey> {
        PublicKey::from_slice(bytes).map_err(|_| Error::InvalidPublicKey)
    }

    fn point_add(&self, a: &PublicKey, b: &PublicKey) -> Result<PublicKey> {
        a.combine(b).map_err(|_| Error::InvalidPublicKey)
    }

    fn compress(&self, point: &PublicKey) -> PublicKeyBytes {
        point.serialize()
    }
}
