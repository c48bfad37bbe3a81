// src/bin/cidv0.rs
//! cidv0: compute and verify IPFS CIDv0 addresses without touching the network

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use content_addresser::config::{self, Config};
use content_addresser::export::{export_to_json, ReportEntry};
use content_addresser::{CidV0, ContentAddresser};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::{DirEntry, WalkDir};

/// 0 = match / done, 1 = CID mismatch, 2 = input or environment error
const EXIT_MISMATCH: u8 = 1;
const EXIT_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "cidv0", version, about = "Local IPFS CIDv0 addressing")]
struct Cli {
    /// Config file (default: $CIDV0_CONFIG, ./cidv0.toml, user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CIDv0 of every file under the given paths
    Hash {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Also write a JSON report here
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Check a file against the CID a pinning service returned
    Verify { path: PathBuf, cid: String },
    /// Address a UTF-8 string literal
    Text { text: String },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_INPUT)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load().clone(),
    };

    let addresser =
        ContentAddresser::from_config(&config).context("Content addressing unavailable")?;
    debug!(
        "addressing with {} ({:?} layout)",
        addresser.algorithm(),
        addresser.layout()
    );

    match cli.command {
        Commands::Hash { paths, json } => hash(&addresser, &config, &paths, json.as_deref()),
        Commands::Verify { path, cid } => verify(&addresser, &path, &cid),
        Commands::Text { text } => {
            println!("{}", addresser.compute(text.as_bytes())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn hash(
    addresser: &ContentAddresser,
    config: &Config,
    paths: &[PathBuf],
    json: Option<&Path>,
) -> Result<ExitCode> {
    let mut entries = Vec::new();
    let mut failed = 0usize;

    for root in paths {
        let walker = WalkDir::new(root)
            .follow_links(config.scan.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| config.scan.include_hidden || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    failed += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let content = match std::fs::read(path) {
                Ok(content) => content,
                Err(err) => {
                    warn!("FAILED {}: {err}", path.display());
                    failed += 1;
                    continue;
                }
            };

            let cid = match addresser.compute(&content) {
                Ok(cid) => cid,
                Err(err) => {
                    warn!("FAILED {}: {err}", path.display());
                    failed += 1;
                    continue;
                }
            };
            let size_bytes = content.len() as u64;
            if size_bytes > config.scan.warn_above_bytes {
                warn!(
                    "{} is {size_bytes} bytes; a pinning service will chunk it and report a different CID",
                    path.display()
                );
            }

            println!("{cid}  {}", path.display());
            entries.push(ReportEntry::new(path, cid, size_bytes));
        }
    }

    if let Some(out) = json {
        export_to_json(&entries, addresser, out, config.report.pretty)
            .with_context(|| format!("Failed to write report {}", out.display()))?;
        info!("Wrote {} entr(ies) → {}", entries.len(), out.display());
    }

    if failed > 0 {
        warn!("{failed} path(s) could not be addressed");
        return Ok(ExitCode::from(EXIT_INPUT));
    }
    Ok(ExitCode::SUCCESS)
}

fn verify(addresser: &ContentAddresser, path: &Path, expected: &str) -> Result<ExitCode> {
    let expected: CidV0 = expected
        .parse()
        .with_context(|| format!("Cannot verify against {expected}"))?;
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let computed = addresser.compute(&content)?;

    if computed == expected {
        println!("OK  {expected}  {}", path.display());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "MISMATCH  expected {expected}, computed {computed}  {}",
            path.display()
        );
        Ok(ExitCode::from(EXIT_MISMATCH))
    }
}

// Depth 0 is whatever the user named, even "."
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}
