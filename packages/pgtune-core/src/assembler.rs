//! Assembles the full parameter set for a request.

use crate::config::TuneRequest;
use crate::params::{ConfigParameterSet, ParamValue};
use crate::tuning::{self, CheckpointSettings, KernelSettings, ParallelSettings};

/// Generates recommended settings for `request`.
///
/// Keys come out in a fixed order: connection and memory settings, planner
/// settings, `work_mem`, then worker settings and checkpoint spacing.
pub fn generate(request: &TuneRequest) -> ConfigParameterSet {
    let TuneRequest {
        version,
        os,
        workload,
        storage,
        hardware,
    } = *request;

    let total_memory_kb = hardware.total_memory_kb();
    let max_connections = tuning::max_connections(workload, hardware.max_connections);
    let parallel = ParallelSettings::compute(version, workload, hardware.cpu_count);
    let defaults = version.defaults();

    let shared_buffers = tuning::shared_buffers(total_memory_kb, workload, os);
    let parallel_divisor = tuning::work_mem_parallel_divisor(&parallel, defaults);
    let work_mem = tuning::work_mem(
        total_memory_kb,
        shared_buffers,
        max_connections,
        parallel_divisor,
        workload,
    );

    tracing::debug!(
        "Generating settings: version={}, os={}, workload={}, storage={}, memory={}GB, cpus={}",
        version,
        os,
        workload,
        storage,
        hardware.total_memory_gb,
        hardware.cpu_count
    );

    let mut params = ConfigParameterSet::new();
    params.insert("max_connections", max_connections);
    params.insert("shared_buffers", ParamValue::size_kb(shared_buffers));
    params.insert(
        "effective_cache_size",
        ParamValue::size_kb(tuning::effective_cache_size(total_memory_kb, workload)),
    );
    params.insert(
        "maintenance_work_mem",
        ParamValue::size_kb(tuning::maintenance_work_mem(total_memory_kb, workload, os)),
    );
    params.insert(
        "checkpoint_completion_target",
        workload.checkpoint_completion_target(),
    );
    params.insert(
        "wal_buffers",
        ParamValue::size_kb(tuning::wal_buffers(shared_buffers)),
    );
    params.insert(
        "default_statistics_target",
        workload.default_statistics_target(),
    );
    params.insert("random_page_cost", tuning::random_page_cost(storage));
    params.insert(
        "effective_io_concurrency",
        tuning::effective_io_concurrency(os, storage),
    );
    params.insert("work_mem", ParamValue::size_kb(work_mem));

    params.merge(parallel.iter());
    params.merge(CheckpointSettings::compute(version, workload).to_params());

    tracing::debug!("Generated {} settings", params.len());
    params
}

/// Kernel shared memory limits for the request's memory size.
pub fn kernel_settings(request: &TuneRequest) -> KernelSettings {
    KernelSettings::compute(request.hardware.total_memory_bytes())
}
