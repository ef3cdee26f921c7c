//! Tuning error types.

use thiserror::Error;

/// Errors raised while turning raw input into tuning domain types.
///
/// Computation itself never fails: once a [`crate::config::TuneRequest`] is
/// built, every lookup is an exhaustive match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TuneError {
    /// Engine version outside the supported list
    #[error("Unsupported engine version '{0}' (expected one of 9.2, 9.3, 9.4, 9.5, 9.6, 10, 11, 12, 13)")]
    UnknownEngineVersion(String),

    /// Workload name not recognised
    #[error("Unknown workload type '{0}' (expected web, oltp, dw, desktop or mixed)")]
    UnknownWorkload(String),

    /// Storage name not recognised
    #[error("Unknown storage type '{0}' (expected ssd, san or hdd)")]
    UnknownStorage(String),

    /// Operating system name not recognised
    #[error("Unknown operating system '{0}' (expected linux, windows or mac)")]
    UnknownOsFamily(String),

    /// Hardware fact outside its positive domain
    #[error("Invalid hardware value for {field}: {value} (must be a positive integer)")]
    InvalidHardware { field: &'static str, value: u64 },

    /// Memory size whose byte count overflows
    #[error("Total memory of {value} GB exceeds the supported maximum of {max} GB")]
    MemoryTooLarge { value: u64, max: u64 },
}

/// Result alias for tuning operations.
pub type Result<T> = std::result::Result<T, TuneError>;
