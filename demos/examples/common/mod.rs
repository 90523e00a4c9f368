// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the demo programs.

use std::fs;
use std::path::Path;

use lineage_tree::{Address, PersonRecord};
use tracing_subscriber::EnvFilter;

/// Family file used when none is given on the command line.
pub const DEFAULT_FAMILY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/family.json");

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the family record, showing the placeholder tree if it is missing or
/// malformed.
pub fn load_family(path: &Path) -> PersonRecord {
    match fs::read_to_string(path) {
        Ok(json) => PersonRecord::from_json_or_placeholder(&json),
        Err(err) => {
            tracing::warn!(
                message = "record.unreadable",
                path = %path.display(),
                error = %err,
            );
            PersonRecord::placeholder()
        }
    }
}

/// Parse an address argument, or explain what went wrong and exit.
pub fn parse_address(arg: &str) -> Address {
    match arg.parse() {
        Ok(address) => address,
        Err(err) => {
            eprintln!("`{arg}` is not an address ({err}).");
            eprintln!("Expected something like 0.1.0");
            std::process::exit(2);
        }
    }
}
