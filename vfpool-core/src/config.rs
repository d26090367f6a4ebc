//! Resource-pool selector configuration.
//!
//! Loading and splitting configuration files is an outer collaborator's
//! job; this module only defines the shape of the already-split string
//! lists and builds the selector pipeline out of them.

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{Result, VfPoolError};
use crate::selectors::{
    validate_entry, DeviceIdSelector, DriverSelector, LinkTypeSelector, PciAddressSelector,
    PfNameSelector, SelectorPipeline, VendorSelector,
};
use crate::types::is_valid_pci_address;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Selection criteria for one resource pool.
///
/// Every list is optional in the serialized form. An absent or empty list
/// means the criterion is not configured and no selector is built for it;
/// this is distinct from a *constructed* selector with an empty allow-list,
/// which matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorConfig {
    /// Hex vendor IDs (e.g., "8086")
    pub vendors: Vec<String>,
    /// Hex device IDs (e.g., "154c")
    pub devices: Vec<String>,
    /// Kernel driver names (e.g., "iavf", "vfio-pci")
    pub drivers: Vec<String>,
    /// Exact PCI addresses (e.g., "0000:01:00.0")
    pub pci_addresses: Vec<String>,
    /// PF names with optional VF ranges (e.g., "netpf0#0-3")
    pub pf_names: Vec<String>,
    /// Link types (e.g., "ether", "infiniband")
    pub link_types: Vec<String>,
}

impl SelectorConfig {
    /// Whether no criterion is configured at all.
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
            && self.devices.is_empty()
            && self.drivers.is_empty()
            && self.pci_addresses.is_empty()
            && self.pf_names.is_empty()
            && self.link_types.is_empty()
    }

    /// Build the selector pipeline for this configuration.
    ///
    /// Malformed PF-name entries are reported through `tracing`.
    pub fn build_pipeline(&self) -> SelectorPipeline {
        self.build_pipeline_with_sink(Arc::new(TracingSink))
    }

    /// Build the selector pipeline, reporting malformed PF-name entries to `sink`.
    ///
    /// Selectors are applied in a fixed order: vendors, devices, drivers,
    /// PCI addresses, PF names, link types.
    pub fn build_pipeline_with_sink(&self, sink: Arc<dyn DiagnosticSink>) -> SelectorPipeline {
        let mut pipeline = SelectorPipeline::new();
        if !self.vendors.is_empty() {
            pipeline.push(Box::new(VendorSelector::new(self.vendors.clone())));
        }
        if !self.devices.is_empty() {
            pipeline.push(Box::new(DeviceIdSelector::new(self.devices.clone())));
        }
        if !self.drivers.is_empty() {
            pipeline.push(Box::new(DriverSelector::new(self.drivers.clone())));
        }
        if !self.pci_addresses.is_empty() {
            pipeline.push(Box::new(PciAddressSelector::new(self.pci_addresses.clone())));
        }
        if !self.pf_names.is_empty() {
            pipeline.push(Box::new(PfNameSelector::with_sink(self.pf_names.clone(), sink)));
        }
        if !self.link_types.is_empty() {
            pipeline.push(Box::new(LinkTypeSelector::new(self.link_types.clone())));
        }
        pipeline
    }

    /// Strict pre-flight validation.
    ///
    /// The filtering path never needs this: malformed entries degrade to
    /// diagnostics there. `validate` is for operators who want
    /// configuration errors surfaced before a pool is published.
    pub fn validate(&self) -> Result<()> {
        for address in &self.pci_addresses {
            if !is_valid_pci_address(address) {
                return Err(VfPoolError::InvalidPciAddress { address: address.clone() });
            }
        }
        for entry in &self.pf_names {
            validate_entry(entry)?;
        }
        Ok(())
    }
}
