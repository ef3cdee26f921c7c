//! Workload types and the per-workload tuning ratios.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuneError;

/// What the database server is mostly used for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadType {
    /// Web application backend
    #[default]
    Web,
    /// Online transaction processing
    Oltp,
    /// Data warehouse / analytics
    #[serde(alias = "data-warehouse")]
    Dw,
    /// Developer or desktop machine sharing memory with other programs
    Desktop,
    /// Mixed web and analytic traffic
    Mixed,
}

impl WorkloadType {
    pub const ALL: [WorkloadType; 5] = [
        WorkloadType::Web,
        WorkloadType::Oltp,
        WorkloadType::Dw,
        WorkloadType::Desktop,
        WorkloadType::Mixed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            WorkloadType::Web => "web",
            WorkloadType::Oltp => "oltp",
            WorkloadType::Dw => "dw",
            WorkloadType::Desktop => "desktop",
            WorkloadType::Mixed => "mixed",
        }
    }

    /// Connection limit suggested when the caller gives none.
    pub const fn default_max_connections(self) -> u32 {
        match self {
            WorkloadType::Web => 200,
            WorkloadType::Oltp => 300,
            WorkloadType::Dw => 40,
            WorkloadType::Desktop => 20,
            WorkloadType::Mixed => 100,
        }
    }

    /// Total memory is divided by this to size `shared_buffers`.
    pub const fn shared_buffers_divisor(self) -> u64 {
        match self {
            WorkloadType::Desktop => 16,
            WorkloadType::Web | WorkloadType::Oltp | WorkloadType::Dw | WorkloadType::Mixed => 4,
        }
    }

    /// `(numerator, denominator)` share of memory assumed to be OS cache.
    pub const fn effective_cache_fraction(self) -> (u64, u64) {
        match self {
            WorkloadType::Desktop => (1, 4),
            WorkloadType::Web | WorkloadType::Oltp | WorkloadType::Dw | WorkloadType::Mixed => {
                (3, 4)
            }
        }
    }

    /// Total memory is divided by this to size `maintenance_work_mem`.
    pub const fn maintenance_work_mem_divisor(self) -> u64 {
        match self {
            WorkloadType::Dw => 8,
            WorkloadType::Web
            | WorkloadType::Oltp
            | WorkloadType::Desktop
            | WorkloadType::Mixed => 16,
        }
    }

    pub const fn checkpoint_completion_target(self) -> f64 {
        match self {
            WorkloadType::Web => 0.7,
            WorkloadType::Oltp | WorkloadType::Dw | WorkloadType::Mixed => 0.9,
            WorkloadType::Desktop => 0.5,
        }
    }

    pub const fn default_statistics_target(self) -> u32 {
        match self {
            WorkloadType::Dw => 500,
            WorkloadType::Web
            | WorkloadType::Oltp
            | WorkloadType::Desktop
            | WorkloadType::Mixed => 100,
        }
    }

    /// Extra divisor applied to the per-connection `work_mem` budget.
    pub const fn work_mem_divisor(self) -> u64 {
        match self {
            WorkloadType::Web | WorkloadType::Oltp => 1,
            WorkloadType::Dw | WorkloadType::Mixed => 2,
            WorkloadType::Desktop => 6,
        }
    }

    /// `checkpoint_segments` for engines that predate `max_wal_size`.
    pub const fn checkpoint_segments(self) -> u32 {
        match self {
            WorkloadType::Web | WorkloadType::Mixed => 32,
            WorkloadType::Oltp => 64,
            WorkloadType::Dw => 128,
            WorkloadType::Desktop => 3,
        }
    }

    /// `min_wal_size` in megabytes.
    pub const fn min_wal_size_mb(self) -> u64 {
        match self {
            WorkloadType::Web | WorkloadType::Mixed => 1024,
            WorkloadType::Oltp => 2048,
            WorkloadType::Dw => 4096,
            WorkloadType::Desktop => 100,
        }
    }

    /// `max_wal_size` in megabytes.
    pub const fn max_wal_size_mb(self) -> u64 {
        match self {
            WorkloadType::Web | WorkloadType::Mixed => 4096,
            WorkloadType::Oltp => 8192,
            WorkloadType::Dw => 16384,
            WorkloadType::Desktop => 2048,
        }
    }

    /// Data warehouses may use every core for a single gather node.
    pub const fn caps_parallel_gather(self) -> bool {
        !matches!(self, WorkloadType::Dw)
    }
}

impl fmt::Display for WorkloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadType {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" => Ok(WorkloadType::Web),
            "oltp" => Ok(WorkloadType::Oltp),
            "dw" | "data-warehouse" => Ok(WorkloadType::Dw),
            "desktop" => Ok(WorkloadType::Desktop),
            "mixed" => Ok(WorkloadType::Mixed),
            _ => Err(TuneError::UnknownWorkload(s.to_string())),
        }
    }
}
