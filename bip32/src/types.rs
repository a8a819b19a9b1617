/// Size of a private scalar and of a chain code.
pub const KEY_SIZE: usize = 32;

/// Size of a compressed SEC1 public key.
pub const PUBLIC_KEY_SIZE: usize = KEY_SIZE + 1;

/// First hardened child index, `2^31`.
pub const HARDENED_FLAG: u32 = 1 << 31;

/// Chain code (extension for deriving child keys).
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth.
pub type Depth = u8;

/// BIP32 key fingerprints.
pub type KeyFingerprint = [u8; 4];

/// Bytes which represent a private key.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// Bytes which represent a compressed public key.
pub type PublicKeyBytes = [u8; PUBLIC_KEY_SIZE];

pub use crate::error::Error;
pub use crate::result::Result;
