// src/core/cid.rs
//! CIDv0 = `Base58(multihash(sha2-256, content))`
//!
//! Everything here is pure: no I/O, no logging, no shared state.
//! The same bytes always give the same address.
//!
//! [`compute_cid`] hashes the bytes as given. [`compute_unixfs_cid`] hashes
//! the UnixFS file node around them, which is what `ipfs add` reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::Config;
use crate::core::base58;
use crate::core::multihash::Multihash;
use crate::core::unixfs;
use crate::enums::{BlockLayout, HashAlgorithm};
use crate::error::CoreError;

/// A version-0 content identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidV0(Multihash);

impl CidV0 {
    /// Address `content` as a single unwrapped block
    pub fn of(content: &[u8]) -> Self {
        Self(Multihash::sha2_256(content))
    }

    pub fn from_multihash(multihash: Multihash) -> Self {
        Self(multihash)
    }

    pub fn multihash(&self) -> &Multihash {
        &self.0
    }

    /// Raw SHA-256 digest as lowercase hex
    pub fn digest_hex(&self) -> String {
        hex::encode(self.0.digest())
    }
}

impl fmt::Display for CidV0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base58::encode(&self.0.to_bytes()))
    }
}

impl fmt::Debug for CidV0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CidV0({self})")
    }
}

impl FromStr for CidV0 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = base58::decode(s.trim())?;
        Multihash::from_bytes(&bytes).map(Self)
    }
}

impl Serialize for CidV0 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CidV0 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Compute the CIDv0 of `content` hashed as one raw block
pub fn compute_cid(content: &[u8]) -> String {
    CidV0::of(content).to_string()
}

/// CIDv0 of `content` wrapped as a single-block UnixFS file
///
/// Fails with [`CoreError::ChunkingRequired`] past one chunk.
pub fn compute_unixfs_cid(content: &[u8]) -> Result<String, CoreError> {
    Ok(CidV0::of(&unixfs::file_node(content)?).to_string())
}

/// Check `content` against an address reported by a pinning service
///
/// A malformed `expected` is an error, not a mismatch.
pub fn verify_cid(content: &[u8], expected: &str) -> Result<bool, CoreError> {
    let expected: CidV0 = expected.parse()?;
    Ok(CidV0::of(content) == expected)
}

/// Content addresser bound to a resolved digest primitive and block layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentAddresser {
    algorithm: HashAlgorithm,
    layout: BlockLayout,
}

impl ContentAddresser {
    pub fn new(algorithm: HashAlgorithm, layout: BlockLayout) -> Self {
        Self { algorithm, layout }
    }

    /// Fails with [`CoreError::ComputationUnavailable`] for unknown names
    pub fn from_name(name: &str, layout: BlockLayout) -> Result<Self, CoreError> {
        Ok(Self::new(HashAlgorithm::from_name(name)?, layout))
    }

    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        Self::from_name(&config.addressing.algorithm, config.addressing.layout)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn layout(&self) -> BlockLayout {
        self.layout
    }

    /// Only the UnixFS layout can fail, and only past one chunk
    pub fn compute(&self, content: &[u8]) -> Result<CidV0, CoreError> {
        match (self.algorithm, self.layout) {
            (HashAlgorithm::Sha2_256, BlockLayout::Raw) => Ok(CidV0::of(content)),
            (HashAlgorithm::Sha2_256, BlockLayout::UnixFs) => {
                Ok(CidV0::of(&unixfs::file_node(content)?))
            }
        }
    }

    pub fn verify(&self, content: &[u8], expected: &str) -> Result<bool, CoreError> {
        let expected: CidV0 = expected.parse()?;
        Ok(self.compute(content)? == expected)
    }
}
