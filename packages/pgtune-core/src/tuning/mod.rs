//! Derived-value calculators, one per tuned setting.
//!
//! Every function is pure; memory quantities are whole kilobytes.

pub mod checkpoint;
pub mod io;
pub mod kernel;
pub mod memory;
pub mod parallel;

pub use checkpoint::CheckpointSettings;
pub use io::{effective_io_concurrency, random_page_cost};
pub use kernel::{kernel_shmall, kernel_shmmax, KernelSettings};
pub use memory::{
    effective_cache_size, maintenance_work_mem, shared_buffers, wal_buffers, work_mem,
    work_mem_parallel_divisor,
};
pub use parallel::ParallelSettings;

use crate::types::WorkloadType;

/// Connection limit: the override wins only when it raises the workload default.
pub fn max_connections(workload: WorkloadType, requested: Option<u32>) -> u32 {
    let default = workload.default_max_connections();
    match requested {
        Some(requested) if requested > default => requested,
        _ => default,
    }
}
