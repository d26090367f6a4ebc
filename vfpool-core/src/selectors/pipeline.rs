//! Selector pipeline: ordered AND-composition of device selectors.

use super::DeviceSelector;
use crate::types::PciDevice;
use metrics::counter;
use tracing::{debug, instrument};

/// Ordered list of selectors applied as a logical AND.
///
/// Each selector narrows the candidate set further. Because every selector
/// is an order-preserving sub-sequence filter, the result equals the
/// intersection of each selector's individual match set with the original
/// candidates, in original order.
#[derive(Debug, Default)]
pub struct SelectorPipeline {
    selectors: Vec<Box<dyn DeviceSelector>>,
}

impl SelectorPipeline {
    pub fn new() -> Self {
        Self { selectors: Vec::new() }
    }

    pub fn with_selectors(selectors: Vec<Box<dyn DeviceSelector>>) -> Self {
        Self { selectors }
    }

    /// Append a selector to the end of the pipeline.
    pub fn push(&mut self, selector: Box<dyn DeviceSelector>) {
        self.selectors.push(selector);
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Narrow `devices` through every selector in order.
    ///
    /// An empty pipeline leaves the candidate set untouched.
    #[instrument(skip(self, devices), fields(selectors = self.selectors.len(), candidates = devices.len()))]
    pub fn apply<'d>(&self, devices: &[&'d PciDevice]) -> Vec<&'d PciDevice> {
        let mut selected: Vec<&'d PciDevice> = devices.to_vec();
        for selector in &self.selectors {
            selected = selector.filter(&selected);
            debug!(selector = ?selector, remaining = selected.len(), "Applied selector");
        }

        counter!("vfpool.pipeline.runs").increment(1);
        counter!("vfpool.pipeline.selected").increment(selected.len() as u64);
        counter!("vfpool.pipeline.rejected").increment((devices.len() - selected.len()) as u64);

        selected
    }
}
