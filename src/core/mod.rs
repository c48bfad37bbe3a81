// src/core/mod.rs
pub mod base58;
pub mod cid;
pub mod file;
pub mod multihash;
pub mod unixfs;

pub use cid::*;
pub use file::*;
pub use multihash::Multihash;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
