// src/core/unixfs.rs
//! Single-block UnixFS file nodes
//!
//! `ipfs add` never stores small files raw: it wraps them in a dag-pb
//! `PBNode` whose `Data` is a UnixFS `Data { Type: File, Data, filesize }`
//! message, and the CIDv0 is taken over that node. Only the one-block case
//! is handled; anything past one chunk becomes a DAG.

use crate::consts::UNIXFS_TYPE_FILE;
use crate::core::file::is_single_block;
use crate::error::CoreError;
use crate::CoreResult as Result;

// protobuf tags: (field << 3) | wire type
const PB_NODE_DATA: u8 = 0x0a; // PBNode.Data, field 1, bytes
const UNIXFS_TYPE: u8 = 0x08; // Data.Type, field 1, varint
const UNIXFS_DATA: u8 = 0x12; // Data.Data, field 2, bytes
const UNIXFS_FILESIZE: u8 = 0x18; // Data.filesize, field 3, varint

/// Encode `content` as the dag-pb node IPFS stores for a one-chunk file
pub fn file_node(content: &[u8]) -> Result<Vec<u8>> {
    let size_bytes = content.len() as u64;
    if !is_single_block(size_bytes) {
        return Err(CoreError::ChunkingRequired { size_bytes });
    }

    let mut data = Vec::with_capacity(content.len() + 16);
    data.push(UNIXFS_TYPE);
    leb128::write::unsigned(&mut data, UNIXFS_TYPE_FILE)?;
    // empty files carry no Data field at all
    if !content.is_empty() {
        data.push(UNIXFS_DATA);
        leb128::write::unsigned(&mut data, size_bytes)?;
        data.extend_from_slice(content);
    }
    data.push(UNIXFS_FILESIZE);
    leb128::write::unsigned(&mut data, size_bytes)?;

    let mut node = Vec::with_capacity(data.len() + 6);
    node.push(PB_NODE_DATA);
    leb128::write::unsigned(&mut node, data.len() as u64)?;
    node.extend_from_slice(&data);
    Ok(node)
}
