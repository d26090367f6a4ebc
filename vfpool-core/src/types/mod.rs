//! Domain types for PCI devices and their network attributes.

mod device;

pub use device::{is_valid_pci_address, vendor, NetDeviceInfo, PciDevice, VfInfo};
