// src/consts.rs
//! Shared constants: multihash layout, alphabet, defaults

/// Multihash function code for sha2-256
pub const SHA2_256_CODE: u8 = 0x12;

/// SHA-256 digest length in bytes
pub const SHA2_256_LEN: usize = 32;

/// Serialized multihash length: code byte + length byte + digest
pub const MULTIHASH_LEN: usize = 2 + SHA2_256_LEN;

/// Bitcoin Base58 alphabet (no `0`, `O`, `I`, `l`)
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// IPFS default chunk size; above this a pinning service builds a DAG
pub const IPFS_CHUNK_SIZE: u64 = 262_144;

/// UnixFS `Data.Type` value for a file node
pub const UNIXFS_TYPE_FILE: u64 = 2;

/// Default digest algorithm name in config files
pub const DEFAULT_ALGORITHM: &str = "sha2-256";

/// Env var pointing at an explicit config file
pub const CONFIG_ENV: &str = "CIDV0_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cidv0.toml";

/// Report format tag written into JSON exports
pub const REPORT_FORMAT: &str = "content-addresser-v1";
