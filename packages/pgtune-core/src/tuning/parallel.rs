//! Background worker and parallel query settings.

use crate::types::{EngineVersion, WorkloadType};

pub const MAX_WORKER_PROCESSES: &str = "max_worker_processes";
pub const MAX_PARALLEL_WORKERS_PER_GATHER: &str = "max_parallel_workers_per_gather";
pub const MAX_PARALLEL_WORKERS: &str = "max_parallel_workers";
pub const MAX_PARALLEL_MAINTENANCE_WORKERS: &str = "max_parallel_maintenance_workers";

/// Upper bound on workers per gather (outside data warehouses) and per
/// maintenance command.
pub const PARALLEL_WORKERS_CAP: u32 = 4;

/// Ordered worker settings; emitted in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelSettings {
    entries: Vec<(&'static str, u32)>,
}

impl ParallelSettings {
    /// Settings for `cpu_count` CPUs.
    ///
    /// Empty before 9.5 or with fewer than two CPUs.
    pub fn compute(version: EngineVersion, workload: WorkloadType, cpu_count: u32) -> Self {
        let mut entries = Vec::with_capacity(4);
        if version < EngineVersion::V9_5 || cpu_count < 2 {
            return Self { entries };
        }

        entries.push((MAX_WORKER_PROCESSES, cpu_count));

        let half = cpu_count.div_ceil(2);
        if version >= EngineVersion::V9_6 {
            let per_gather = if workload.caps_parallel_gather() {
                half.min(PARALLEL_WORKERS_CAP)
            } else {
                half
            };
            entries.push((MAX_PARALLEL_WORKERS_PER_GATHER, per_gather));
        }

        if version >= EngineVersion::V10 {
            entries.push((MAX_PARALLEL_WORKERS, cpu_count));
        }

        if version >= EngineVersion::V11 {
            entries.push((
                MAX_PARALLEL_MAINTENANCE_WORKERS,
                half.min(PARALLEL_WORKERS_CAP),
            ));
        }

        tracing::debug!(
            "Parallel settings for {} CPUs on {}: {:?}",
            cpu_count,
            version,
            entries
        );
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    pub fn max_parallel_workers_per_gather(&self) -> Option<u32> {
        self.get(MAX_PARALLEL_WORKERS_PER_GATHER)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }
}
