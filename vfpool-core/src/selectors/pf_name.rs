//! PF-name selector with embedded VF-range grammar.
//!
//! Configured entries name a physical function and optionally narrow the
//! selection to a subset of its virtual functions:
//!
//! ```text
//! netpf0            all VFs under netpf0
//! netpf0#3-5        VFs 3, 4 and 5 (bounds inclusive)
//! netpf0#0,2,4-7    VFs 0, 2 and 4 through 7
//! ```
//!
//! Entry lookup matches the first configured entry whose text starts with
//! the device's PF name. Malformed entries are non-fatal: they are reported
//! to the diagnostic sink and the affected entry/device combination is
//! excluded without aborting the rest of the pass.

use super::{first_entry_prefixed_by, DeviceSelector};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{Result, VfPoolError};
use crate::types::PciDevice;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Selects SR-IOV virtual functions by parent PF name, optionally narrowed
/// to explicit VF index ranges.
pub struct PfNameSelector {
    pf_names: Vec<String>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl PfNameSelector {
    /// Create a selector reporting malformed entries through `tracing`.
    pub fn new(pf_names: Vec<String>) -> Self {
        Self::with_sink(pf_names, Arc::new(TracingSink))
    }

    /// Create a selector reporting malformed entries to `sink`.
    pub fn with_sink(pf_names: Vec<String>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { pf_names, diagnostics: sink }
    }

    /// Whether `vf_index` is selected by the ranges part of an entry.
    ///
    /// `ranges` is the text after `#`: comma-separated single indices and
    /// inclusive `start-end` spans. Evaluation stops at the first match, so
    /// a device is included at most once however many range-entries cover
    /// its index. Unparsable range-entries are reported and skipped.
    fn vf_index_selected(&self, pf_name: &str, ranges: &str, vf_index: u32) -> bool {
        for range_entry in ranges.split(',') {
            if range_entry.contains('-') {
                let bounds: Vec<&str> = range_entry.split('-').collect();
                if bounds.len() != 2 {
                    self.diagnostics.emit(&format!(
                        "Failed to parse {} PF name selector, probably incorrect range character usage",
                        pf_name
                    ));
                    continue;
                }
                let start = match bounds[0].parse::<u32>() {
                    Ok(value) => value,
                    Err(_) => {
                        self.diagnostics.emit(&format!(
                            "Failed to parse {} PF name selector, start range is incorrect",
                            pf_name
                        ));
                        continue;
                    }
                };
                let end = match bounds[1].parse::<u32>() {
                    Ok(value) => value,
                    Err(_) => {
                        self.diagnostics.emit(&format!(
                            "Failed to parse {} PF name selector, end range is incorrect",
                            pf_name
                        ));
                        continue;
                    }
                };
                if (start..=end).contains(&vf_index) {
                    return true;
                }
            } else {
                match range_entry.parse::<u32>() {
                    Ok(index) if index == vf_index => return true,
                    Ok(_) => {}
                    Err(_) => {
                        self.diagnostics.emit(&format!(
                            "Failed to parse {} PF name selector, index is incorrect",
                            pf_name
                        ));
                    }
                }
            }
        }
        false
    }
}

impl DeviceSelector for PfNameSelector {
    fn filter<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice> {
        let mut filtered = Vec::new();
        for dev in devices {
            let Some(vf) = dev.net.as_ref().and_then(|net| net.vf.as_ref()) else {
                debug!(address = %dev.address, "Skipping device without VF attributes in PF name selector");
                continue;
            };
            if vf.pf_name.is_empty() {
                continue;
            }

            let Some(entry) = first_entry_prefixed_by(&self.pf_names, &vf.pf_name) else {
                continue;
            };

            if !entry.contains('#') {
                // No range part: every VF under the PF is selected.
                filtered.push(*dev);
                continue;
            }

            let fields: Vec<&str> = entry.split('#').collect();
            if fields.len() != 2 {
                self.diagnostics.emit(&format!(
                    "Failed to parse {} PF name selector, probably incorrect separator character usage",
                    vf.pf_name
                ));
                continue;
            }

            if self.vf_index_selected(&vf.pf_name, fields[1], vf.index) {
                filtered.push(*dev);
            }
        }
        filtered
    }
}

impl fmt::Debug for PfNameSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PfNameSelector").field("pf_names", &self.pf_names).finish_non_exhaustive()
    }
}

/// Strictly parse one configured PF-name entry.
///
/// The filtering path stays lenient and degrades malformed entries to
/// diagnostics; this check backs `SelectorConfig::validate` for operators
/// who want configuration errors surfaced up front.
pub(crate) fn validate_entry(entry: &str) -> Result<()> {
    let invalid = |reason: &str| VfPoolError::InvalidSelectorEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    if !entry.contains('#') {
        return Ok(());
    }

    let fields: Vec<&str> = entry.split('#').collect();
    if fields.len() != 2 {
        return Err(invalid("expected a single '#' separator"));
    }
    if fields[0].is_empty() {
        return Err(invalid("missing PF name before '#'"));
    }

    for range_entry in fields[1].split(',') {
        if range_entry.contains('-') {
            let bounds: Vec<&str> = range_entry.split('-').collect();
            if bounds.len() != 2 {
                return Err(invalid("VF range must be '<start>-<end>'"));
            }
            let start: u32 = bounds[0]
                .parse()
                .map_err(|_| invalid("VF range start is not a non-negative integer"))?;
            let end: u32 = bounds[1]
                .parse()
                .map_err(|_| invalid("VF range end is not a non-negative integer"))?;
            if start > end {
                return Err(invalid("VF range start exceeds end"));
            }
        } else {
            range_entry
                .parse::<u32>()
                .map_err(|_| invalid("VF index is not a non-negative integer"))?;
        }
    }

    Ok(())
}
