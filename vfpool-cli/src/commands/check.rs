//! `vfpool check` command

use anyhow::{bail, Result};
use std::path::Path;

/// Validate a selector configuration without applying it.
pub fn run(config_path: &Path) -> Result<()> {
    let config = super::load_config(config_path)?;

    if let Err(err) = config.validate() {
        bail!("Invalid selector configuration: {err}");
    }

    if config.is_empty() {
        println!("Configuration OK (no criterion configured; pipeline passes all candidates)");
    } else {
        println!("Configuration OK: {} selector(s)", config.build_pipeline().len());
    }

    Ok(())
}
