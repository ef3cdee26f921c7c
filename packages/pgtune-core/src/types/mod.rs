//! Tuning input domain: engine versions, workloads, platforms and hardware.

pub mod hardware;
pub mod platform;
pub mod version;
pub mod workload;

pub use hardware::{HardwareProfile, MAX_TOTAL_MEMORY_GB};
pub use platform::{OsFamily, StorageType};
pub use version::{EngineVersion, VersionDefaults};
pub use workload::WorkloadType;
