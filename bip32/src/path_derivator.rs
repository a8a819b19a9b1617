//! Walking derivation paths while tracking the lineage needed for serialization.

use crate::{
    ChildKeyAttributes, ChildNumber, DerivationPath, Depth, Error, ExtendedKey, KEY_SIZE, KeyAccessControl, KeyData,
    KeyFingerprint, Network, PublicKeyBytes, Result, Version,
    coder::SerializedKeyCoder,
    curve::{CurvePrimitives, Secp256k1Curve},
    fingerprint::KeyFingerprintDerivator,
    master_key::PrivateMasterKeyDerivator,
    private_child_key::PrivateChildKeyDerivator,
    public_child_key::PublicChildKeyDerivator,
    serializer::KeySerializer,
};
use keytree_hashes::{HashPrimitives, Sha2Hashes};
use log::trace;

/// An [`ExtendedKey`] together with its position in the key tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyNode {
    pub key: ExtendedKey,
    pub depth: Depth,
    pub parent_fingerprint: KeyFingerprint,
    /// Child number, hardened status in the top bit.
    pub index: u32,
}

impl KeyNode {
    /// Wrap a master key (depth 0, no parent).
    pub fn master(key: ExtendedKey) -> Self {
        Self { key, depth: 0, parent_fingerprint: KeyFingerprint::default(), index: 0 }
    }

    pub fn access_control(&self) -> KeyAccessControl {
        self.key.access_control()
    }

    pub fn child_number(&self) -> ChildNumber {
        ChildNumber(self.index)
    }

    /// Serialization attributes for this node on `network`.
    pub fn attributes(&self, network: Network) -> ChildKeyAttributes {
        let access_control = self.access_control();
        ChildKeyAttributes {
            access_control,
            version: Version::new(network, access_control).into(),
            depth: self.depth,
            parent_key_fingerprint: self.parent_fingerprint,
            index: self.index,
        }
    }
}

/// Derives [`KeyNode`]s along [`DerivationPath`]s and converts them to and from text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathDerivator<C = Secp256k1Curve, H = Sha2Hashes> {
    master: PrivateMasterKeyDerivator<C, H>,
    private: PrivateChildKeyDerivator<C, H>,
    public: PublicChildKeyDerivator<C, H>,
    fingerprint: KeyFingerprintDerivator<H>,
    serializer: KeySerializer<C>,
    coder: SerializedKeyCoder<H>,
}

impl<C: CurvePrimitives + Clone, H: HashPrimitives + Clone> PathDerivator<C, H> {
    pub fn new(curve: C, hashes: H) -> Self {
        Self {
            master: PrivateMasterKeyDerivator::new(curve.clone(), hashes.clone()),
            private: PrivateChildKeyDerivator::new(curve.clone(), hashes.clone()),
            public: PublicChildKeyDerivator::new(curve.clone(), hashes.clone()),
            fingerprint: KeyFingerprintDerivator::new(hashes.clone()),
            serializer: KeySerializer::new(curve),
            coder: SerializedKeyCoder::new(hashes),
        }
    }
}

impl<C: CurvePrimitives, H: HashPrimitives> PathDerivator<C, H> {
    /// Private master node of `seed`.
    pub fn master<S: AsRef<[u8]>>(&self, seed: S) -> Result<KeyNode> {
        Ok(KeyNode::master(self.master.private_master_key(seed)?))
    }

    /// Private node at `path` below the master key of `seed`.
    pub fn from_seed<S: AsRef<[u8]>>(&self, seed: S, path: &DerivationPath) -> Result<KeyNode> {
        self.derive_path(&self.master(seed)?, path)
    }

    /// Child of `node` at `index`, private or public depending on `node`.
    pub fn derive_child(&self, node: &KeyNode, index: u32) -> Result<KeyNode> {
        let depth = node.depth.checked_add(1).ok_or(Error::Depth)?;

        let (key, parent_fingerprint) = match &node.key.key {
            KeyData::Private(_) => {
                let key = self.private.private_child_key(&node.key, index)?;
                let parent_public_key = self.public.public_key(&node.key)?;
                (key, self.fingerprint.fingerprint(&public_key_bytes(&parent_public_key)?))
            }
            KeyData::Public(parent_key) => {
                (self.public.public_child_key(&node.key, index)?, self.fingerprint.fingerprint(parent_key))
            }
        };

        trace!("derived {} child {} at depth {depth}", node.access_control(), ChildNumber(index));
        Ok(KeyNode { key, depth, parent_fingerprint, index })
    }

    /// Walk `path` starting at `node`.
    ///
    /// Private nodes walk with CKDpriv and public nodes with CKDpub; any
    /// failing step ends the walk with its error.
    pub fn derive_path(&self, node: &KeyNode, path: &DerivationPath) -> Result<KeyNode> {
        path.iter().try_fold(node.clone(), |node, child| self.derive_child(&node, child.into()))
    }

    /// Public counterpart of `node`, keeping its lineage.
    pub fn neuter(&self, node: &KeyNode) -> Result<KeyNode> {
        match node.access_control() {
            KeyAccessControl::Public => Ok(node.clone()),
            KeyAccessControl::Private => Ok(KeyNode { key: self.public.public_key(&node.key)?, ..node.clone() }),
        }
    }

    /// Serialize and Base58Check-encode `node` for `network`.
    pub fn encode(&self, node: &KeyNode, network: Network) -> Result<String> {
        let serialized_key = self.serializer.serialized_key(&node.key, &node.attributes(network))?;
        Ok(self.coder.encode(&serialized_key))
    }

    /// Decode Base58Check text into a node and the network its version belongs to.
    pub fn decode(&self, encoded: &str) -> Result<(KeyNode, Network)> {
        let serialized_key = self.coder.decode(encoded)?;
        let (key, attributes) = self.serializer.deserialized_key(&serialized_key)?;
        let (network, _) = Version::network_and_access(attributes.version).ok_or(Error::UnknownVersion(attributes.version))?;

        let node = KeyNode { key, depth: attributes.depth, parent_fingerprint: attributes.parent_key_fingerprint, index: attributes.index };
        Ok((node, network))
    }
}

fn public_key_bytes(extended_key: &ExtendedKey) -> Result<PublicKeyBytes> {
    match &extended_key.key {
        KeyData::Public(bytes) => Ok(*bytes),
        KeyData::Private(_) => Err(Error::key_data_size_mismatch(KeyAccessControl::Public, KEY_SIZE)),
    }
}
