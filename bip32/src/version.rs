//! Version prefixes of serialized extended keys.

use crate::KeyAccessControl;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Network an extended key is serialized for.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Four byte version prefix selected by network and key access control.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Version(u32);

impl Version {
    /// `xprv`
    pub const XPRV: Version = Version(0x0488_ADE4);
    /// `xpub`
    pub const XPUB: Version = Version(0x0488_B21E);
    /// `tprv`
    pub const TPRV: Version = Version(0x0435_8394);
    /// `tpub`
    pub const TPUB: Version = Version(0x0435_87CF);

    pub const fn new(network: Network, access_control: KeyAccessControl) -> Self {
        match (network, access_control) {
            (Network::Mainnet, KeyAccessControl::Private) => Version::XPRV,
            (Network::Mainnet, KeyAccessControl::Public) => Version::XPUB,
            (Network::Testnet, KeyAccessControl::Private) => Version::TPRV,
            (Network::Testnet, KeyAccessControl::Public) => Version::TPUB,
        }
    }

    /// Reverse lookup of a raw version prefix through [`new`](Self::new).
    pub fn network_and_access(version: u32) -> Option<(Network, KeyAccessControl)> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .flat_map(|network| [KeyAccessControl::Private, KeyAccessControl::Public].map(|access_control| (network, access_control)))
            .find(|&(network, access_control)| Version::new(network, access_control).0 == version)
    }

    /// Raw version prefix.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Leading characters of the Base58Check text produced under this version.
    pub fn as_str(self) -> &'static str {
        match self {
            Version::XPRV => "xprv",
            Version::XPUB => "xpub",
            Version::TPRV => "tprv",
            _ => "tpub",
        }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<Version> for u32 {
    fn from(version: Version) -> u32 {
        version.0
    }
}

impl TryFrom<u32> for Version {
    type Error = crate::Error;

    fn try_from(version: u32) -> crate::Result<Version> {
        Version::network_and_access(version)
            .map(|(network, access_control)| Version::new(network, access_control))
            .ok_or(crate::Error::UnknownVersion(version))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_table() {
        assert_eq!(Version::new(Network::Mainnet, KeyAccessControl::Private).value(), 0x0488ADE4);
        assert_eq!(Version::new(Network::Mainnet, KeyAccessControl::Public).value(), 0x0488B21E);
        assert_eq!(Version::new(Network::Testnet, KeyAccessControl::Private).value(), 0x04358394);
        assert_eq!(Version::new(Network::Testnet, KeyAccessControl::Public).value(), 0x043587CF);

        for network in [Network::Mainnet, Network::Testnet] {
            for access_control in [KeyAccessControl::Private, KeyAccessControl::Public] {
                let version = Version::new(network, access_control);
                assert_eq!(Version::network_and_access(version.into()), Some((network, access_control)));
                assert_eq!(Version::try_from(version.value()).unwrap(), version);
            }
        }

        assert_eq!(Version::network_and_access(0xDEAD_BEEF), None);
        assert_eq!(Version::try_from(0), Err(crate::Error::UnknownVersion(0)));
    }

    #[test]
    fn test_version_prefix_str() {
        assert_eq!(Version::XPRV.to_string(), "xprv");
        assert_eq!(Version::XPUB.to_string(), "xpub");
        assert_eq!(Version::TPRV.to_string(), "tprv");
        assert_eq!(Version::TPUB.to_string(), "tpub");
        assert_eq!(Version::XPUB.to_bytes(), [0x04, 0x88, 0xB2, 0x1E]);
    }
}
