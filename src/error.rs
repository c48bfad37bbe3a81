// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// The requested digest primitive cannot be used here. Fatal, never retried.
    #[error("content addressing unavailable: no digest primitive for `{algorithm}`")]
    ComputationUnavailable { algorithm: String },

    #[error("invalid Base58 character {ch:?} at index {index}")]
    InvalidBase58 { ch: char, index: usize },

    #[error("invalid multihash: {0}")]
    InvalidMultihash(String),

    #[error("{size_bytes} bytes exceeds one UnixFS block; IPFS would chunk it into a DAG")]
    ChunkingRequired { size_bytes: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
