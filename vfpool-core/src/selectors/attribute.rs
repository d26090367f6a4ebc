//! Basic attribute selectors.
//!
//! Each selector is an exact, case-sensitive set-membership predicate over
//! one device attribute. An empty allow-list selects nothing; "match
//! everything" is expressed by not configuring the selector at all.

use super::{list_contains, DeviceSelector};
use crate::types::PciDevice;
use tracing::debug;

/// Selects devices whose vendor ID is in the allow-list.
#[derive(Debug, Clone)]
pub struct VendorSelector {
    vendors: Vec<String>,
}

impl VendorSelector {
    pub fn new(vendors: Vec<String>) -> Self {
        Self { vendors }
    }
}

impl DeviceSelector for VendorSelector {
    fn filter<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice> {
        devices.iter().filter(|dev| list_contains(&self.vendors, &dev.vendor_id)).copied().collect()
    }
}

/// Selects devices whose device ID is in the allow-list.
#[derive(Debug, Clone)]
pub struct DeviceIdSelector {
    devices: Vec<String>,
}

impl DeviceIdSelector {
    pub fn new(devices: Vec<String>) -> Self {
        Self { devices }
    }
}

impl DeviceSelector for DeviceIdSelector {
    fn filter<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice> {
        devices.iter().filter(|dev| list_contains(&self.devices, &dev.device_id)).copied().collect()
    }
}

/// Selects devices whose bound driver is in the allow-list.
///
/// Unbound devices match an empty-string entry in the allow-list.
#[derive(Debug, Clone)]
pub struct DriverSelector {
    drivers: Vec<String>,
}

impl DriverSelector {
    pub fn new(drivers: Vec<String>) -> Self {
        Self { drivers }
    }
}

impl DeviceSelector for DriverSelector {
    fn filter<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice> {
        devices.iter().filter(|dev| list_contains(&self.drivers, dev.driver_name())).copied().collect()
    }
}

/// Selects devices by exact PCI address.
#[derive(Debug, Clone)]
pub struct PciAddressSelector {
    addresses: Vec<String>,
}

impl PciAddressSelector {
    pub fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }
}

impl DeviceSelector for PciAddressSelector {
    fn filter<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice> {
        devices.iter().filter(|dev| list_contains(&self.addresses, &dev.address)).copied().collect()
    }
}

/// Selects network devices whose link type is in the allow-list.
///
/// Devices without network attributes are excluded, never unwrapped.
#[derive(Debug, Clone)]
pub struct LinkTypeSelector {
    link_types: Vec<String>,
}

impl LinkTypeSelector {
    pub fn new(link_types: Vec<String>) -> Self {
        Self { link_types }
    }
}

impl DeviceSelector for LinkTypeSelector {
    fn filter<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice> {
        devices
            .iter()
            .filter(|dev| match &dev.net {
                Some(net) => list_contains(&self.link_types, &net.link_type),
                None => {
                    debug!(address = %dev.address, "Skipping non-network device in link-type selector");
                    false
                }
            })
            .copied()
            .collect()
    }
}
