//! Tuning request configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{EngineVersion, HardwareProfile, OsFamily, StorageType, WorkloadType};

/// Everything the generator needs to know about one server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuneRequest {
    /// Target engine version (default 13)
    #[serde(default)]
    pub version: EngineVersion,
    /// Operating system (default linux)
    #[serde(default)]
    pub os: OsFamily,
    /// Workload type (default web)
    #[serde(default)]
    pub workload: WorkloadType,
    /// Storage medium (default ssd)
    #[serde(default)]
    pub storage: StorageType,
    /// Memory, CPU and connection facts
    pub hardware: HardwareProfile,
}

impl TuneRequest {
    /// Request with default version, OS, workload and storage.
    pub fn new(hardware: HardwareProfile) -> Self {
        Self {
            version: EngineVersion::default(),
            os: OsFamily::default(),
            workload: WorkloadType::default(),
            storage: StorageType::default(),
            hardware,
        }
    }

    pub fn with_version(mut self, version: EngineVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_os(mut self, os: OsFamily) -> Self {
        self.os = os;
        self
    }

    pub fn with_workload(mut self, workload: WorkloadType) -> Self {
        self.workload = workload;
        self
    }

    pub fn with_storage(mut self, storage: StorageType) -> Self {
        self.storage = storage;
        self
    }

    /// Checks the hardware facts of a request built outside [`HardwareProfile::new`].
    pub fn validate(&self) -> Result<()> {
        self.hardware.validate()
    }
}
