//! Storage-dependent planner and prefetch settings.

use crate::params::ParamValue;
use crate::types::{OsFamily, StorageType};

/// `None` where the platform lacks the prefetch support the setting drives.
pub fn effective_io_concurrency(os: OsFamily, storage: StorageType) -> Option<u32> {
    if !os.supports_io_concurrency() {
        return None;
    }
    Some(storage.io_concurrency())
}

/// Whole costs are emitted as integers, so HDD reads `4` rather than `4.0`.
pub fn random_page_cost(storage: StorageType) -> ParamValue {
    let cost = storage.random_page_cost();
    if cost.fract() == 0.0 {
        ParamValue::Integer(cost as u64)
    } else {
        ParamValue::Float(cost)
    }
}
