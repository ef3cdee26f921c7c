//! Complete outputs for representative servers.

use ntest::timeout;

use pgtune_core::types::{EngineVersion, HardwareProfile, OsFamily, StorageType, WorkloadType};
use pgtune_core::{generate, kernel_settings, ParamValue, TuneRequest};

use super::helpers::{expected, request, size, sz};

fn web_linux_ssd(memory_gb: u64, cpus: u32) -> TuneRequest {
    request(
        EngineVersion::V13,
        OsFamily::Linux,
        WorkloadType::Web,
        StorageType::Ssd,
        memory_gb,
        cpus,
    )
}

#[test]
#[timeout(1000)]
fn test_web_server_with_8gb() {
    let params = generate(&web_linux_ssd(8, 2));
    let want = expected(&[
        ("max_connections", ParamValue::Integer(200)),
        ("shared_buffers", sz("2GB")),
        ("effective_cache_size", sz("6GB")),
        ("maintenance_work_mem", sz("512MB")),
        ("checkpoint_completion_target", ParamValue::Float(0.7)),
        ("wal_buffers", sz("16MB")),
        ("default_statistics_target", ParamValue::Integer(100)),
        ("random_page_cost", ParamValue::Float(1.1)),
        ("effective_io_concurrency", ParamValue::Integer(200)),
        ("work_mem", sz("10485kB")),
        ("max_worker_processes", ParamValue::Integer(2)),
        ("max_parallel_workers_per_gather", ParamValue::Integer(1)),
        ("max_parallel_workers", ParamValue::Integer(2)),
        ("max_parallel_maintenance_workers", ParamValue::Integer(1)),
        ("min_wal_size", sz("1GB")),
        ("max_wal_size", sz("4GB")),
    ]);
    assert_eq!(params, want);
}

/// Spinning disks change only the storage-driven settings.
#[test]
#[timeout(1000)]
fn test_web_server_with_2gb_on_hdd() {
    let request = web_linux_ssd(2, 2).with_storage(StorageType::Hdd);
    let params = generate(&request);
    let want = expected(&[
        ("max_connections", ParamValue::Integer(200)),
        ("shared_buffers", sz("512MB")),
        ("effective_cache_size", sz("1536MB")),
        ("maintenance_work_mem", sz("128MB")),
        ("checkpoint_completion_target", ParamValue::Float(0.7)),
        ("wal_buffers", sz("16MB")),
        ("default_statistics_target", ParamValue::Integer(100)),
        ("random_page_cost", ParamValue::Integer(4)),
        ("effective_io_concurrency", ParamValue::Integer(2)),
        ("work_mem", sz("2621kB")),
        ("max_worker_processes", ParamValue::Integer(2)),
        ("max_parallel_workers_per_gather", ParamValue::Integer(1)),
        ("max_parallel_workers", ParamValue::Integer(2)),
        ("max_parallel_maintenance_workers", ParamValue::Integer(1)),
        ("min_wal_size", sz("1GB")),
        ("max_wal_size", sz("4GB")),
    ]);
    assert_eq!(params, want);
}

#[test]
#[timeout(1000)]
fn test_connection_override_with_2gb() {
    let hardware = HardwareProfile::new(2, 2)
        .unwrap()
        .with_max_connections(500)
        .unwrap();
    let params = generate(&TuneRequest::new(hardware));
    let want = expected(&[
        ("max_connections", ParamValue::Integer(500)),
        ("shared_buffers", sz("512MB")),
        ("effective_cache_size", sz("1536MB")),
        ("maintenance_work_mem", sz("128MB")),
        ("checkpoint_completion_target", ParamValue::Float(0.7)),
        ("wal_buffers", sz("16MB")),
        ("default_statistics_target", ParamValue::Integer(100)),
        ("random_page_cost", ParamValue::Float(1.1)),
        ("effective_io_concurrency", ParamValue::Integer(200)),
        ("work_mem", sz("1048kB")),
        ("max_worker_processes", ParamValue::Integer(2)),
        ("max_parallel_workers_per_gather", ParamValue::Integer(1)),
        ("max_parallel_workers", ParamValue::Integer(2)),
        ("max_parallel_maintenance_workers", ParamValue::Integer(1)),
        ("min_wal_size", sz("1GB")),
        ("max_wal_size", sz("4GB")),
    ]);
    assert_eq!(params, want);
}

#[test]
#[timeout(1000)]
fn test_connection_override_only_changes_work_mem() -> anyhow::Result<()> {
    let base = web_linux_ssd(8, 2);
    let hardware = base.hardware.with_max_connections(500)?;
    let overridden = TuneRequest { hardware, ..base };

    let before = generate(&base);
    let after = generate(&overridden);

    assert_eq!(after.get("max_connections"), Some(&ParamValue::Integer(500)));
    // (8GB - 2GB) / (500 * 3) = 4194.304
    assert_eq!(size(&after, "work_mem"), "4194kB");

    for (name, value) in before.iter() {
        if name == "max_connections" || name == "work_mem" {
            continue;
        }
        assert_eq!(after.get(name), Some(value), "{} changed", name);
    }
    Ok(())
}

#[test]
#[timeout(1000)]
fn test_smaller_override_is_ignored() -> anyhow::Result<()> {
    let base = web_linux_ssd(8, 2);
    let hardware = base.hardware.with_max_connections(50)?;
    let params = generate(&TuneRequest { hardware, ..base });
    assert_eq!(params, generate(&base));
    Ok(())
}

#[test]
#[timeout(1000)]
fn test_windows_server_with_64gb() {
    let request = web_linux_ssd(64, 8).with_os(OsFamily::Windows);
    let params = generate(&request);
    let want = expected(&[
        ("max_connections", ParamValue::Integer(200)),
        ("shared_buffers", sz("512MB")),
        ("effective_cache_size", sz("48GB")),
        ("maintenance_work_mem", sz("2047MB")),
        ("checkpoint_completion_target", ParamValue::Float(0.7)),
        ("wal_buffers", sz("16MB")),
        ("default_statistics_target", ParamValue::Integer(100)),
        ("random_page_cost", ParamValue::Float(1.1)),
        ("effective_io_concurrency", ParamValue::Null),
        ("work_mem", sz("27743kB")),
        ("max_worker_processes", ParamValue::Integer(8)),
        ("max_parallel_workers_per_gather", ParamValue::Integer(4)),
        ("max_parallel_workers", ParamValue::Integer(8)),
        ("max_parallel_maintenance_workers", ParamValue::Integer(4)),
        ("min_wal_size", sz("1GB")),
        ("max_wal_size", sz("4GB")),
    ]);
    assert_eq!(params, want);
}

#[test]
#[timeout(1000)]
fn test_data_warehouse_on_many_cores() {
    let request = request(
        EngineVersion::V12,
        OsFamily::Linux,
        WorkloadType::Dw,
        StorageType::San,
        128,
        32,
    );
    let params = generate(&request);
    let want = expected(&[
        ("max_connections", ParamValue::Integer(40)),
        ("shared_buffers", sz("32GB")),
        ("effective_cache_size", sz("96GB")),
        ("maintenance_work_mem", sz("2GB")),
        ("checkpoint_completion_target", ParamValue::Float(0.9)),
        ("wal_buffers", sz("16MB")),
        ("default_statistics_target", ParamValue::Integer(500)),
        ("random_page_cost", ParamValue::Float(1.1)),
        ("effective_io_concurrency", ParamValue::Integer(300)),
        // (128GB - 32GB) / 120 / 16 / 2
        ("work_mem", sz("26214kB")),
        ("max_worker_processes", ParamValue::Integer(32)),
        ("max_parallel_workers_per_gather", ParamValue::Integer(16)),
        ("max_parallel_workers", ParamValue::Integer(32)),
        ("max_parallel_maintenance_workers", ParamValue::Integer(4)),
        ("min_wal_size", sz("4GB")),
        ("max_wal_size", sz("16GB")),
    ]);
    assert_eq!(params, want);
}

#[test]
#[timeout(1000)]
fn test_legacy_desktop_install() {
    let request = request(
        EngineVersion::V9_2,
        OsFamily::Mac,
        WorkloadType::Desktop,
        StorageType::Hdd,
        4,
        4,
    );
    let params = generate(&request);
    let want = expected(&[
        ("max_connections", ParamValue::Integer(20)),
        ("shared_buffers", sz("256MB")),
        ("effective_cache_size", sz("1GB")),
        ("maintenance_work_mem", sz("256MB")),
        ("checkpoint_completion_target", ParamValue::Float(0.5)),
        ("wal_buffers", sz("7864kB")),
        ("default_statistics_target", ParamValue::Integer(100)),
        ("random_page_cost", ParamValue::Integer(4)),
        ("effective_io_concurrency", ParamValue::Null),
        // (4GB - 256MB) / 60 / 1 / 6
        ("work_mem", sz("10922kB")),
        ("checkpoint_segments", ParamValue::Integer(3)),
    ]);
    assert_eq!(params, want);
}

#[test]
#[timeout(1000)]
fn test_version_9_5_has_only_worker_processes() {
    let request = request(
        EngineVersion::V9_5,
        OsFamily::Linux,
        WorkloadType::Oltp,
        StorageType::Ssd,
        16,
        8,
    );
    let params = generate(&request);
    assert_eq!(params.get("max_worker_processes"), Some(&ParamValue::Integer(8)));
    assert!(!params.contains("max_parallel_workers_per_gather"));
    assert!(!params.contains("max_parallel_workers"));
    assert_eq!(size(&params, "min_wal_size"), "2GB");
    assert_eq!(size(&params, "max_wal_size"), "8GB");
    // (16GB - 4GB) / 900 / 1 = 13981.01
    assert_eq!(size(&params, "work_mem"), "13981kB");
}

#[test]
#[timeout(1000)]
fn test_kernel_limits_follow_memory() {
    let kernel = kernel_settings(&web_linux_ssd(16, 4));
    assert_eq!(kernel.shmall, 2_097_152);
    assert_eq!(kernel.shmmax, 8_589_934_592);
}

#[test]
#[timeout(1000)]
fn test_json_output_is_ordered_mapping() -> anyhow::Result<()> {
    let params = generate(&web_linux_ssd(8, 2).with_os(OsFamily::Windows));
    let json = serde_json::to_string(&params)?;
    assert!(json.starts_with(r#"{"max_connections":200,"shared_buffers":"512MB""#));
    assert!(json.contains(r#""effective_io_concurrency":null"#));
    assert!(json.ends_with(r#""min_wal_size":"1GB","max_wal_size":"4GB"}"#));
    Ok(())
}
