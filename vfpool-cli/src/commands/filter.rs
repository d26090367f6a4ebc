//! `vfpool filter` command

use anyhow::{Context, Result};
use std::path::Path;
use vfpool_core::PciDevice;

/// Apply a selector configuration to a device snapshot and print the
/// resulting pool membership.
pub fn run(devices_path: &Path, config_path: &Path, quiet: bool) -> Result<()> {
    let devices = load_devices(devices_path)?;
    let config = super::load_config(config_path)?;

    let pipeline = config.build_pipeline();
    let candidates: Vec<&PciDevice> = devices.iter().collect();
    let selected = pipeline.apply(&candidates);

    if quiet {
        for dev in &selected {
            println!("{}", dev.address);
        }
        return Ok(());
    }

    if selected.is_empty() {
        println!("No devices matched the configured selectors");
        return Ok(());
    }

    println!(
        "{:<15} {:<22} {:<12} {:<10} {:<4} {:<10}",
        "PCI ADDRESS", "DEVICE", "DRIVER", "PF", "VF", "LINK"
    );
    println!("{}", "-".repeat(78));

    for dev in &selected {
        let driver = dev.driver.as_deref().unwrap_or("-");
        let (pf_name, vf_index, link_type) = match &dev.net {
            Some(net) => {
                let (pf_name, vf_index) = match &net.vf {
                    Some(vf) => (vf.pf_name.as_str(), vf.index.to_string()),
                    None => ("-", "-".to_string()),
                };
                (pf_name, vf_index, net.link_type.as_str())
            }
            None => ("-", "-".to_string(), "-"),
        };

        println!(
            "{:<15} {:<22} {:<12} {:<10} {:<4} {:<10}",
            dev.address,
            dev.display_name(),
            driver,
            pf_name,
            vf_index,
            link_type
        );
    }

    println!();
    println!("Total: {} device(s) of {} candidate(s)", selected.len(), devices.len());

    Ok(())
}

fn load_devices(path: &Path) -> Result<Vec<PciDevice>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read device snapshot {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse device snapshot {}", path.display()))
}
