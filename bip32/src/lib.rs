//!
//! BIP32 hierarchical deterministic key derivation over secp256k1.
//!
//! Master keys are generated from a seed with [`PrivateMasterKeyDerivator`],
//! children with [`PrivateChildKeyDerivator`] and [`PublicChildKeyDerivator`],
//! and keys are carried as text through [`KeySerializer`] and [`SerializedKeyCoder`].
//! [`PathDerivator`] ties these together along a [`DerivationPath`].
//!
//! Curve and hash operations are supplied by [`CurvePrimitives`] and
//! [`HashPrimitives`] implementations, defaulting to [`Secp256k1Curve`] and [`Sha2Hashes`].
//!

mod attrs;
mod child_number;
mod coder;
mod curve;
mod derivation_path;
mod error;
mod fingerprint;
mod master_key;
mod path_derivator;
mod private_child_key;
mod public_child_key;
mod result;
mod serializer;
pub mod types;
#[cfg(test)]
mod testutils;
mod version;
mod xkey;

pub use attrs::{ChildKeyAttributes, KeyAccessControl};
pub use child_number::{ChildNumber, KeyIndexHardener};
pub use coder::{ENCODED_KEY_SIZE, SerializedKeyCoder};
pub use curve::{CurvePrimitives, Secp256k1Curve};
pub use derivation_path::DerivationPath;
pub use fingerprint::KeyFingerprintDerivator;
pub use keytree_hashes::{HashPrimitives, Sha2Hashes};
pub use master_key::{PrivateMasterKeyDerivator, PublicMasterKeyDerivator};
pub use path_derivator::{KeyNode, PathDerivator};
pub use private_child_key::PrivateChildKeyDerivator;
pub use public_child_key::PublicChildKeyDerivator;
pub use serializer::{KeySerializer, SerializedKey};
pub use types::*;
pub use version::{Network, Version};
pub use xkey::{ExtendedKey, KeyData};
