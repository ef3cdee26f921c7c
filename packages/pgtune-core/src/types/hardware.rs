//! Hardware facts describing the target server.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuneError};
use crate::units::{self, SizeUnit};

/// Largest memory size whose byte count still fits in a `u64`.
pub const MAX_TOTAL_MEMORY_GB: u64 = u64::MAX / units::GB;

/// Memory, CPU and connection facts for one server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Total RAM in gigabytes
    pub total_memory_gb: u64,
    /// CPUs available to PostgreSQL (threads per core * cores * sockets)
    pub cpu_count: u32,
    /// Connection limit requested by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
}

impl HardwareProfile {
    /// Creates a profile, rejecting zero CPU count and memory outside
    /// `1..=MAX_TOTAL_MEMORY_GB`.
    pub fn new(total_memory_gb: u64, cpu_count: u32) -> Result<Self> {
        if total_memory_gb == 0 {
            return Err(TuneError::InvalidHardware {
                field: "total_memory_gb",
                value: 0,
            });
        }
        if total_memory_gb > MAX_TOTAL_MEMORY_GB {
            return Err(TuneError::MemoryTooLarge {
                value: total_memory_gb,
                max: MAX_TOTAL_MEMORY_GB,
            });
        }
        if cpu_count == 0 {
            return Err(TuneError::InvalidHardware {
                field: "cpu_count",
                value: 0,
            });
        }
        Ok(Self {
            total_memory_gb,
            cpu_count,
            max_connections: None,
        })
    }

    /// Sets the connection limit override.
    pub fn with_max_connections(mut self, max_connections: u32) -> Result<Self> {
        if max_connections == 0 {
            return Err(TuneError::InvalidHardware {
                field: "max_connections",
                value: 0,
            });
        }
        self.max_connections = Some(max_connections);
        Ok(self)
    }

    /// Re-checks a profile built field by field (e.g. deserialized).
    pub fn validate(&self) -> Result<()> {
        let checked = Self::new(self.total_memory_gb, self.cpu_count)?;
        match self.max_connections {
            Some(connections) => checked.with_max_connections(connections).map(|_| ()),
            None => Ok(()),
        }
    }

    pub fn total_memory_bytes(&self) -> u64 {
        units::to_bytes(self.total_memory_gb, SizeUnit::Gigabytes)
    }

    pub fn total_memory_kb(&self) -> u64 {
        units::to_kilobytes(self.total_memory_bytes())
    }
}
