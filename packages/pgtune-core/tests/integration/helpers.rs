//! Shared fixtures for integration tests.

use pgtune_core::types::{EngineVersion, HardwareProfile, OsFamily, StorageType, WorkloadType};
use pgtune_core::{ConfigParameterSet, ParamValue, TuneRequest};

pub const MEMORY_SIZES_GB: [u64; 10] = [1, 2, 3, 4, 6, 8, 16, 64, 256, 1024];
pub const CPU_COUNTS: [u32; 7] = [1, 2, 3, 4, 8, 16, 64];

pub fn request(
    version: EngineVersion,
    os: OsFamily,
    workload: WorkloadType,
    storage: StorageType,
    memory_gb: u64,
    cpus: u32,
) -> TuneRequest {
    TuneRequest::new(HardwareProfile::new(memory_gb, cpus).unwrap())
        .with_version(version)
        .with_os(os)
        .with_workload(workload)
        .with_storage(storage)
}

/// Every combination of enumerated inputs.
pub fn all_requests() -> impl Iterator<Item = TuneRequest> {
    EngineVersion::ALL.into_iter().flat_map(|version| {
        OsFamily::ALL.into_iter().flat_map(move |os| {
            WorkloadType::ALL.into_iter().flat_map(move |workload| {
                StorageType::ALL.into_iter().flat_map(move |storage| {
                    MEMORY_SIZES_GB.into_iter().flat_map(move |memory_gb| {
                        CPU_COUNTS.into_iter().map(move |cpus| {
                            request(version, os, workload, storage, memory_gb, cpus)
                        })
                    })
                })
            })
        })
    })
}

/// Parses `"16MB"`-style output back into kilobytes.
pub fn size_kb(value: &ParamValue) -> u64 {
    let text = value.as_size().expect("size value");
    let (digits, multiplier) = if let Some(digits) = text.strip_suffix("GB") {
        (digits, 1024 * 1024)
    } else if let Some(digits) = text.strip_suffix("MB") {
        (digits, 1024)
    } else if let Some(digits) = text.strip_suffix("kB") {
        (digits, 1)
    } else {
        panic!("unexpected size format: {}", text);
    };
    digits.parse::<u64>().expect("numeric size") * multiplier
}

pub fn size(params: &ConfigParameterSet, name: &str) -> String {
    params
        .get(name)
        .and_then(ParamValue::as_size)
        .unwrap_or_else(|| panic!("missing size setting {}", name))
        .to_string()
}

pub fn expected(pairs: &[(&str, ParamValue)]) -> ConfigParameterSet {
    let mut params = ConfigParameterSet::new();
    params.merge(pairs.iter().cloned());
    params
}

pub fn sz(value: &str) -> ParamValue {
    ParamValue::Size(value.to_string())
}
