// src/export/mod.rs
//! Export utilities for content-addresser
//!
//! JSON reports of computed addresses, for cross-checking against what a
//! pinning service returned.

pub use json::{build_report, export_to_json, ReportEntry};

pub mod json;
