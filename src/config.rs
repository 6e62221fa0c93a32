// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Extractor configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which debug bundle directories are created
    pub output_root: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let output_root = env::var("EXTRACT_OUTPUT_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Ok(Config { output_root })
    }
}
