//! End-to-end properties of the selector family over a mixed device snapshot.

use std::sync::Arc;
use vfpool_core::{
    DeviceIdSelector, DeviceSelector, DriverSelector, LinkTypeSelector, MemorySink,
    NetDeviceInfo, PciAddressSelector, PciDevice, PfNameSelector, SelectorConfig, VendorSelector,
    VfInfo,
};

/// A snapshot the way discovery would hand it over: SR-IOV VFs from two
/// vendors, a PF without VF attributes, and a non-network NVMe function.
fn snapshot() -> Vec<PciDevice> {
    let vf = |address: &str, vendor: &str, device: &str, driver: &str, pf: &str, index: u32| {
        PciDevice {
            address: address.to_string(),
            vendor_id: vendor.to_string(),
            device_id: device.to_string(),
            driver: Some(driver.to_string()),
            net: Some(NetDeviceInfo {
                link_type: "ether".to_string(),
                vf: Some(VfInfo { pf_name: pf.to_string(), index }),
            }),
        }
    };

    vec![
        vf("0000:01:02.0", "8086", "154c", "iavf", "netpf0", 0),
        vf("0000:01:02.1", "8086", "154c", "iavf", "netpf0", 1),
        vf("0000:01:02.2", "8086", "154c", "vfio-pci", "netpf0", 2),
        vf("0000:02:03.0", "15b3", "1014", "mlx5_core", "ib0", 0),
        PciDevice {
            address: "0000:01:00.0".to_string(),
            vendor_id: "8086".to_string(),
            device_id: "1572".to_string(),
            driver: Some("i40e".to_string()),
            net: Some(NetDeviceInfo { link_type: "ether".to_string(), vf: None }),
        },
        PciDevice {
            address: "0000:04:00.0".to_string(),
            vendor_id: "144d".to_string(),
            device_id: "a808".to_string(),
            driver: Some("nvme".to_string()),
            net: None,
        },
    ]
}

fn addresses<'d>(devices: &[&'d PciDevice]) -> Vec<&'d str> {
    devices.iter().map(|d| d.address.as_str()).collect()
}

fn is_subsequence(result: &[&PciDevice], input: &[&PciDevice]) -> bool {
    let mut input_iter = input.iter();
    result.iter().all(|r| input_iter.any(|i| std::ptr::eq(*i, *r)))
}

fn all_selectors() -> Vec<Box<dyn DeviceSelector>> {
    let s = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        Box::new(VendorSelector::new(s(&["8086"]))),
        Box::new(DeviceIdSelector::new(s(&["154c", "1014"]))),
        Box::new(DriverSelector::new(s(&["iavf", "mlx5_core"]))),
        Box::new(PciAddressSelector::new(s(&["0000:01:02.1", "0000:04:00.0"]))),
        Box::new(PfNameSelector::new(s(&["netpf0#0-1", "ib0"]))),
        Box::new(LinkTypeSelector::new(s(&["ether"]))),
    ]
}

#[test]
fn every_selector_returns_an_ordered_subsequence() {
    let devices = snapshot();
    let candidates: Vec<&PciDevice> = devices.iter().collect();

    for selector in all_selectors() {
        let result = selector.filter(&candidates);
        assert!(
            is_subsequence(&result, &candidates),
            "selector {:?} reordered or duplicated devices",
            selector
        );
    }
}

#[test]
fn every_selector_is_idempotent() {
    let devices = snapshot();
    let candidates: Vec<&PciDevice> = devices.iter().collect();

    for selector in all_selectors() {
        let once = selector.filter(&candidates);
        let twice = selector.filter(&once);
        assert_eq!(addresses(&once), addresses(&twice), "selector {:?} not idempotent", selector);
    }
}

#[test]
fn pipeline_equals_intersection_of_individual_match_sets() {
    let devices = snapshot();
    let candidates: Vec<&PciDevice> = devices.iter().collect();

    let config = SelectorConfig {
        vendors: vec!["8086".to_string()],
        drivers: vec!["iavf".to_string(), "vfio-pci".to_string()],
        pf_names: vec!["netpf0#0-1".to_string()],
        ..Default::default()
    };

    let piped = config.build_pipeline().apply(&candidates);

    // Intersect each selector's individual match set with the original
    // candidate list, preserving candidate order.
    let vendor = VendorSelector::new(config.vendors.clone());
    let driver = DriverSelector::new(config.drivers.clone());
    let pf = PfNameSelector::new(config.pf_names.clone());
    let individual: Vec<Vec<&str>> = vec![
        addresses(&vendor.filter(&candidates)),
        addresses(&driver.filter(&candidates)),
        addresses(&pf.filter(&candidates)),
    ];
    let intersected: Vec<&str> = candidates
        .iter()
        .map(|d| d.address.as_str())
        .filter(|addr| individual.iter().all(|set| set.contains(addr)))
        .collect();

    assert_eq!(addresses(&piped), intersected);
    assert_eq!(addresses(&piped), vec!["0000:01:02.0", "0000:01:02.1"]);
}

#[test]
fn capability_mismatch_excludes_instead_of_panicking() {
    let devices = snapshot();
    let candidates: Vec<&PciDevice> = devices.iter().collect();

    // Both net-only selectors see the NVMe function and the PF without VF
    // attributes; neither may panic over them.
    let link = LinkTypeSelector::new(vec!["ether".to_string()]);
    let result = link.filter(&candidates);
    assert!(!addresses(&result).contains(&"0000:04:00.0"));

    let pf = PfNameSelector::new(vec!["netpf0".to_string()]);
    let result = pf.filter(&candidates);
    assert_eq!(
        addresses(&result),
        vec!["0000:01:02.0", "0000:01:02.1", "0000:01:02.2"]
    );
}

#[test]
fn config_json_to_pool_membership() {
    let devices = snapshot();
    let candidates: Vec<&PciDevice> = devices.iter().collect();

    let config: SelectorConfig = serde_json::from_str(
        r#"{
            "vendors": ["8086"],
            "devices": ["154c"],
            "drivers": ["iavf", "vfio-pci"],
            "pfNames": ["netpf0#0,2"],
            "linkTypes": ["ether"]
        }"#,
    )
    .expect("config should parse");

    let sink = Arc::new(MemorySink::new());
    let pipeline = config.build_pipeline_with_sink(sink.clone());
    assert_eq!(pipeline.len(), 5);

    let selected = pipeline.apply(&candidates);
    assert_eq!(addresses(&selected), vec!["0000:01:02.0", "0000:01:02.2"]);
    assert!(sink.is_empty());
}

#[test]
fn malformed_range_entry_reported_through_injected_sink() {
    let devices = snapshot();
    let candidates: Vec<&PciDevice> = devices.iter().collect();

    let config = SelectorConfig {
        pf_names: vec!["netpf0#a-5".to_string(), "ib0".to_string()],
        ..Default::default()
    };

    let sink = Arc::new(MemorySink::new());
    let selected = config.build_pipeline_with_sink(sink.clone()).apply(&candidates);

    // The malformed entry kills netpf0 matches; the valid ib0 entry still applies.
    assert_eq!(addresses(&selected), vec!["0000:02:03.0"]);
    assert!(!sink.is_empty());
    assert!(sink.messages().iter().all(|m| m.contains("netpf0")));
}
