// src/core/multihash.rs
//! The sha2-256 multihash record behind every CIDv0
//!
//! Layout is fixed: `[0x12, 0x20, digest[0..32]]`.

use sha2::{Digest, Sha256};

use crate::consts::{MULTIHASH_LEN, SHA2_256_CODE, SHA2_256_LEN};
use crate::error::CoreError;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multihash {
    digest: [u8; SHA2_256_LEN],
}

impl Multihash {
    /// Hash `content` with SHA-256 and wrap the digest
    pub fn sha2_256(content: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(content).into())
    }

    pub fn from_digest(digest: [u8; SHA2_256_LEN]) -> Self {
        Self { digest }
    }

    /// Parse a serialized multihash, accepting only sha2-256 / 32 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() != MULTIHASH_LEN {
            return Err(CoreError::InvalidMultihash(format!(
                "expected {MULTIHASH_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        if bytes[0] != SHA2_256_CODE {
            return Err(CoreError::InvalidMultihash(format!(
                "unsupported function code 0x{:02x}",
                bytes[0]
            )));
        }
        if usize::from(bytes[1]) != SHA2_256_LEN {
            return Err(CoreError::InvalidMultihash(format!(
                "digest length {} does not match sha2-256",
                bytes[1]
            )));
        }

        let mut digest = [0u8; SHA2_256_LEN];
        digest.copy_from_slice(&bytes[2..]);
        Ok(Self { digest })
    }

    #[inline]
    pub fn code(&self) -> u8 {
        SHA2_256_CODE
    }

    #[inline]
    pub fn digest_len(&self) -> u8 {
        SHA2_256_LEN as u8
    }

    #[inline]
    pub fn digest(&self) -> &[u8; SHA2_256_LEN] {
        &self.digest
    }

    pub fn to_bytes(&self) -> [u8; MULTIHASH_LEN] {
        let mut out = [0u8; MULTIHASH_LEN];
        out[0] = self.code();
        out[1] = self.digest_len();
        out[2..].copy_from_slice(&self.digest);
        out
    }
}

impl std::fmt::Debug for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Multihash(sha2-256:{})", hex::encode(self.digest))
    }
}
