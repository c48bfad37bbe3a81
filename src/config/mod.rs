// src/config/mod.rs
//! Configuration system for content-addresser
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, Addressing, Config, Report, Scan};

mod app;
mod defaults;
