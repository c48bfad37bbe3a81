// src/config/defaults.rs
use crate::config::app::{Addressing, Report, Scan};
use crate::consts::{DEFAULT_ALGORITHM, IPFS_CHUNK_SIZE};
use crate::enums::BlockLayout;

impl Default for Addressing {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.into(),
            layout: BlockLayout::default(),
        }
    }
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: false,
            warn_above_bytes: IPFS_CHUNK_SIZE,
        }
    }
}

impl Default for Report {
    fn default() -> Self {
        Self { pretty: true }
    }
}
