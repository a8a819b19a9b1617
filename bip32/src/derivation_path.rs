//! Textual derivation paths, `m/0'/1/2h`.

use crate::{ChildNumber, Error, Result};
use core::{fmt, str::FromStr};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Root marker every path starts with.
const ROOT: &str = "m";

/// Sequence of child numbers walked from a master key.
///
/// The empty path denotes the master key itself.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the master key path `m`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last step of the path, `None` at the root.
    pub fn last(&self) -> Option<ChildNumber> {
        self.0.last().copied()
    }

    /// Path with the last step removed, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;
        Some(Self(parent.to_vec()))
    }

    /// Copy of this path extended by `child_number`.
    pub fn child(&self, child_number: ChildNumber) -> Self {
        let mut path = self.clone();
        path.push(child_number);
        path
    }

    pub fn push(&mut self, child_number: ChildNumber) {
        self.0.push(child_number)
    }

    /// `true` if no step is hardened, so the path can be walked from a public key.
    pub fn is_public_derivable(&self) -> bool {
        !self.0.iter().any(ChildNumber::is_hardened)
    }
}

impl From<Vec<ChildNumber>> for DerivationPath {
    fn from(path: Vec<ChildNumber>) -> Self {
        Self(path)
    }
}

impl AsRef<[ChildNumber]> for DerivationPath {
    fn as_ref(&self) -> &[ChildNumber] {
        &self.0
    }
}

impl FromIterator<ChildNumber> for DerivationPath {
    fn from_iter<I: IntoIterator<Item = ChildNumber>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<ChildNumber> for DerivationPath {
    fn extend<I: IntoIterator<Item = ChildNumber>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for DerivationPath {
    type Item = ChildNumber;
    type IntoIter = std::vec::IntoIter<ChildNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT)?;
        self.iter().try_for_each(|child_number| write!(f, "/{child_number}"))
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        let Some(steps) = path.strip_prefix(ROOT) else {
            return Err(Error::DerivationPath(format!("`{path}` does not start at `{ROOT}`")));
        };

        if steps.is_empty() {
            return Ok(Self::default());
        }

        let Some(steps) = steps.strip_prefix('/') else {
            return Err(Error::DerivationPath(format!("`{path}` does not start at `{ROOT}`")));
        };

        steps.split('/').map(ChildNumber::from_str).collect()
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let path = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        path.parse().map_err(de::Error::custom)
    }
}
