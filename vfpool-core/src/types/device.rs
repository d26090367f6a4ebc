//! PCI device records as handed over by the discovery collaborator.
//!
//! Records are read-only snapshots: discovery owns them, selectors only
//! borrow. Devices exposing network attributes carry an extra attribute
//! block, so selectors that need those attributes check for the capability
//! instead of assuming it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regular expression to validate PCI address format: 0000:01:00.0
static PCI_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{4}:[0-9a-fA-F]{2}:[0-9a-fA-F]{2}\.[0-7]$")
        .expect("Invalid PCI address regex")
});

/// Known NIC vendor IDs.
pub mod vendor {
    pub const INTEL: &str = "8086";
    pub const MELLANOX: &str = "15b3";
    pub const BROADCOM: &str = "14e4";
}

/// One PCI function as reported by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PciDevice {
    /// PCI address (e.g., "0000:01:00.0"); unique within a snapshot
    pub address: String,
    /// Vendor ID (e.g., "8086" for Intel)
    pub vendor_id: String,
    /// Device ID (e.g., "154c" for an X710 VF)
    pub device_id: String,
    /// Current driver (None if unbound)
    pub driver: Option<String>,
    /// Network-device attributes (None for non-network functions)
    pub net: Option<NetDeviceInfo>,
}

/// Attributes present only on network-capable devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetDeviceInfo {
    /// Link type reported by the netdev (e.g., "ether", "infiniband")
    pub link_type: String,
    /// SR-IOV virtual-function attributes (None when the function has no parent PF)
    pub vf: Option<VfInfo>,
}

/// Placement of a virtual function under its parent physical function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfInfo {
    /// Parent PF netdev name (e.g., "netpf0")
    pub pf_name: String,
    /// VF index under the parent PF
    pub index: u32,
}

impl PciDevice {
    /// Driver name as used for selector matching; unbound devices compare
    /// as the empty string.
    pub fn driver_name(&self) -> &str {
        self.driver.as_deref().unwrap_or("")
    }

    /// Whether this device exposes network-device attributes.
    pub fn is_net_device(&self) -> bool {
        self.net.is_some()
    }

    /// Get a human-readable device name.
    pub fn display_name(&self) -> String {
        let vendor_name = match self.vendor_id.as_str() {
            vendor::INTEL => "Intel",
            vendor::MELLANOX => "Mellanox",
            vendor::BROADCOM => "Broadcom",
            _ => "Unknown",
        };

        format!("{} [{}:{}]", vendor_name, self.vendor_id, self.device_id)
    }
}

/// Validate PCI address format.
pub fn is_valid_pci_address(address: &str) -> bool {
    PCI_ADDRESS_REGEX.is_match(address)
}
