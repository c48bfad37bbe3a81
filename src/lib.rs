// src/lib.rs
//! content-addresser: local IPFS CIDv0 computation
//!
//! Features:
//! - SHA-256 multihash + Base58 (Bitcoin alphabet) CIDv0 strings
//! - Verification of pinning-service addresses before or after upload
//! - Whole-file addressing and JSON reports
//! - TOML config with env override

pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod export;

pub mod error;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use core::{
    compute_cid, compute_cid_file, compute_unixfs_cid, verify_cid, verify_file, CidV0,
    ContentAddresser, Multihash, Result as CoreResult,
};
pub use enums::{BlockLayout, HashAlgorithm};
pub use error::CoreError;
pub use export::export_to_json;
