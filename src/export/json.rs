// src/export/json.rs
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::consts::REPORT_FORMAT;
use crate::core::{is_single_block, CidV0, ContentAddresser};
use crate::CoreResult as Result;

/// One addressed file in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub cid: CidV0,
    /// SHA-256 inside the multihash (of the UnixFS node, for that layout)
    pub digest_hex: String,
    pub size_bytes: u64,
    /// False when IPFS would chunk the payload and assign a different CID
    pub single_block: bool,
}

impl ReportEntry {
    pub fn new(path: impl Into<PathBuf>, cid: CidV0, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            digest_hex: cid.digest_hex(),
            cid,
            size_bytes,
            single_block: is_single_block(size_bytes),
        }
    }

    /// Address in-memory content with the same addresser the report is built from
    pub fn from_content(
        path: impl Into<PathBuf>,
        content: &[u8],
        addresser: &ContentAddresser,
    ) -> Result<Self> {
        let cid = addresser.compute(content)?;
        Ok(Self::new(path, cid, content.len() as u64))
    }
}

/// Assemble the report document
///
/// The `layout` header comes from `addresser`, which must be the one that
/// produced `entries`.
pub fn build_report(
    entries: &[ReportEntry],
    addresser: &ContentAddresser,
    generated_at: DateTime<Utc>,
) -> Result<Value> {
    Ok(json!({
        "report_format": REPORT_FORMAT,
        "generated_at": generated_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "generator_version": env!("CARGO_PKG_VERSION"),
        "algorithm": addresser.algorithm(),
        "layout": addresser.layout(),
        "total_files": entries.len(),
        "entries": serde_json::to_value(entries)?,
    }))
}

/// Write a JSON report of computed addresses to `path`
pub fn export_to_json<P: AsRef<Path>>(
    entries: &[ReportEntry],
    addresser: &ContentAddresser,
    path: P,
    pretty: bool,
) -> Result<()> {
    let report = build_report(entries, addresser, Utc::now())?;
    let body = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    std::fs::write(path.as_ref(), body)?;
    Ok(())
}
