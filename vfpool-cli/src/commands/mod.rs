//! CLI subcommands.

pub mod check;
pub mod filter;

use anyhow::{Context, Result};
use std::path::Path;
use vfpool_core::SelectorConfig;

/// Load a selector configuration from a JSON file.
pub(crate) fn load_config(path: &Path) -> Result<SelectorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read selector config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse selector config {}", path.display()))
}
