// src/core/file.rs
//! File-level addressing
//!
//! Builds on the pure CID primitives from cid.rs. Files are read whole
//! and addressed as one block, the way IPFS treats small uploads.

use std::path::Path;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use crate::consts::IPFS_CHUNK_SIZE;
use crate::core::cid::CidV0;
use crate::CoreResult as Result;

/// Read a file from disk and compute its CIDv0
///
/// Under `logging` this warns past one IPFS chunk (`IPFS_CHUNK_SIZE`), the
/// point where a pinning service starts chunking. That is a fixed property
/// of IPFS, so `scan.warn_above_bytes` does not move it; that setting only
/// tunes the `cidv0 hash` scan.
pub fn compute_cid_file<P: AsRef<Path>>(path: P) -> Result<CidV0> {
    let content = std::fs::read(path.as_ref())?;
    let cid = CidV0::of(&content);

    #[cfg(feature = "logging")]
    {
        debug!(
            path = %path.as_ref().display(),
            size_bytes = content.len(),
            %cid,
            "addressed file"
        );
        if !is_single_block(content.len() as u64) {
            warn!(
                path = %path.as_ref().display(),
                size_bytes = content.len(),
                "larger than one IPFS chunk, a pinning service will report a different CID"
            );
        }
    }

    Ok(cid)
}

/// Check a file on disk against an expected CIDv0
pub fn verify_file<P: AsRef<Path>>(path: P, expected: &str) -> Result<bool> {
    let expected: CidV0 = expected.parse()?;
    Ok(compute_cid_file(path)? == expected)
}

/// Whether IPFS stores `len` bytes as a single block (no DAG wrapping)
#[inline]
pub fn is_single_block(len: u64) -> bool {
    len <= IPFS_CHUNK_SIZE
}
