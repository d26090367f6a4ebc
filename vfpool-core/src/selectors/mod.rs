//! Device selectors: composable predicate filters over PCI device records.
//!
//! A resource pool is defined by a list of selectors; each narrows the
//! candidate set by one attribute dimension. All selectors are pure,
//! order-preserving filters over read-only device snapshots, so applying a
//! list of them is a logical AND across the configured criteria.

mod attribute;
mod pf_name;
mod pipeline;


use crate::types::PciDevice;
use std::fmt;

pub use attribute::{
    DeviceIdSelector, DriverSelector, LinkTypeSelector, PciAddressSelector, VendorSelector,
};
pub use pf_name::PfNameSelector;
pub use pipeline::SelectorPipeline;

pub(crate) use pf_name::validate_entry;

/// A named predicate rule filtering a device set by one attribute dimension.
pub trait DeviceSelector: fmt::Debug + Send + Sync {
    /// Return, in original order, the devices matching this selector.
    ///
    /// The output is always a sub-sequence of the input: order preserved,
    /// no duplicates introduced, no attributes modified.
    fn filter<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice>;
}

/// Exact-membership test over a configured allow-list.
///
/// Allow-lists are operator-supplied and typically hold a handful of
/// entries; a linear scan is the whole cost model.
pub(crate) fn list_contains(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item == value)
}

/// First configured entry whose text starts with `name`.
///
/// The prefix direction is deliberate and easy to get backwards: the
/// configured entry must have the device's PF name as a prefix, so
/// `"netpf0#3-5"` qualifies for a device whose PF is named `"netpf0"`.
/// The first qualifying entry in configuration order wins, even when a
/// later entry would match more precisely.
pub(crate) fn first_entry_prefixed_by<'a>(entries: &'a [String], name: &str) -> Option<&'a str> {
    entries.iter().find(|entry| entry.starts_with(name)).map(String::as_str)
}
