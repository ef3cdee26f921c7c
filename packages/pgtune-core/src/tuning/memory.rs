//! Memory settings, all computed in kilobytes.

use crate::types::{OsFamily, VersionDefaults, WorkloadType};
use crate::units::{KB_PER_GB, KB_PER_MB};

use super::parallel::ParallelSettings;

/// Largest `shared_buffers` Windows handles well.
pub const WINDOWS_SHARED_BUFFERS_LIMIT_KB: u64 = 512 * KB_PER_MB;
/// Ceiling for `maintenance_work_mem`.
pub const MAINTENANCE_WORK_MEM_LIMIT_KB: u64 = 2 * KB_PER_GB;
/// Ceiling for `wal_buffers`.
pub const WAL_BUFFERS_LIMIT_KB: u64 = 16 * KB_PER_MB;
/// Values above this are rounded up to [`WAL_BUFFERS_LIMIT_KB`].
pub const WAL_BUFFERS_ROUND_UP_KB: u64 = 14 * KB_PER_MB;
pub const WAL_BUFFERS_MIN_KB: u64 = 32;
pub const WORK_MEM_MIN_KB: u64 = 64;

pub fn shared_buffers(total_memory_kb: u64, workload: WorkloadType, os: OsFamily) -> u64 {
    let value = total_memory_kb / workload.shared_buffers_divisor();
    tracing::debug!("shared_buffers = {}kB before platform limits", value);
    if os == OsFamily::Windows && value > WINDOWS_SHARED_BUFFERS_LIMIT_KB {
        tracing::debug!(
            "Clamping shared_buffers from {}kB to the Windows limit",
            value
        );
        return WINDOWS_SHARED_BUFFERS_LIMIT_KB;
    }
    value
}

pub fn effective_cache_size(total_memory_kb: u64, workload: WorkloadType) -> u64 {
    let (numerator, denominator) = workload.effective_cache_fraction();
    let value = total_memory_kb * numerator / denominator;
    tracing::debug!("effective_cache_size = {}kB", value);
    value
}

/// Capped at 2GB; Windows keeps 1MB below the cap.
pub fn maintenance_work_mem(total_memory_kb: u64, workload: WorkloadType, os: OsFamily) -> u64 {
    let value = total_memory_kb / workload.maintenance_work_mem_divisor();
    tracing::debug!("maintenance_work_mem = {}kB before cap", value);
    if value <= MAINTENANCE_WORK_MEM_LIMIT_KB {
        return value;
    }
    tracing::debug!("Capping maintenance_work_mem from {}kB", value);
    match os {
        OsFamily::Windows => MAINTENANCE_WORK_MEM_LIMIT_KB - KB_PER_MB,
        OsFamily::Linux | OsFamily::Mac => MAINTENANCE_WORK_MEM_LIMIT_KB,
    }
}

/// 3% of `shared_buffers`, between 32kB and 16MB.
///
/// Anything strictly between 14MB and 16MB is rounded up to 16MB, which is
/// the common case for a Windows box clamped to 512MB of shared buffers.
pub fn wal_buffers(shared_buffers_kb: u64) -> u64 {
    let value = (3 * shared_buffers_kb / 100).min(WAL_BUFFERS_LIMIT_KB);
    let value = if value > WAL_BUFFERS_ROUND_UP_KB && value < WAL_BUFFERS_LIMIT_KB {
        WAL_BUFFERS_LIMIT_KB
    } else {
        value
    };
    let value = value.max(WAL_BUFFERS_MIN_KB);
    tracing::debug!("wal_buffers = {}kB", value);
    value
}

/// Workers sharing one sort or hash budget.
///
/// Prefers the computed `max_parallel_workers_per_gather`, then the engine's
/// built-in value, then 1.
pub fn work_mem_parallel_divisor(parallel: &ParallelSettings, defaults: &VersionDefaults) -> u64 {
    parallel
        .max_parallel_workers_per_gather()
        .filter(|workers| *workers > 0)
        .or(defaults.max_parallel_workers_per_gather.filter(|workers| *workers > 0))
        .map_or(1, u64::from)
}

/// Per-operation memory budget, at least 64kB.
pub fn work_mem(
    total_memory_kb: u64,
    shared_buffers_kb: u64,
    max_connections: u32,
    parallel_divisor: u64,
    workload: WorkloadType,
) -> u64 {
    let connections = u64::from(max_connections.max(1)) * 3;
    let value = total_memory_kb.saturating_sub(shared_buffers_kb)
        / connections
        / parallel_divisor.max(1)
        / workload.work_mem_divisor();
    tracing::debug!(
        "work_mem = {}kB across {} connections, parallel divisor {}",
        value,
        max_connections,
        parallel_divisor
    );
    value.max(WORK_MEM_MIN_KB)
}
