// src/enums.rs
//! Public enum types used throughout the crate

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Digest algorithms a CIDv0 can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "sha2-256")]
    Sha2_256,
}

impl HashAlgorithm {
    /// Resolve a configured algorithm name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sha2-256" | "sha256" | "sha-256" => Ok(Self::Sha2_256),
            _ => Err(CoreError::ComputationUnavailable {
                algorithm: name.to_owned(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sha2_256 => "sha2-256",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How content is framed before hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum BlockLayout {
    /// Hash the bytes exactly as given
    #[default]
    Raw,
    /// Wrap in a single UnixFS file node first, as `ipfs add` does
    UnixFs,
}
