//! Checkpoint spacing settings.

use crate::params::ParamValue;
use crate::types::{EngineVersion, WorkloadType};
use crate::units;

/// How far apart checkpoints may drift, depending on engine generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointSettings {
    /// Engines before 9.5 count 16MB WAL segments.
    Segments(u32),
    /// Engines from 9.5 bound WAL volume directly, in kilobytes.
    WalSize { min_wal_size_kb: u64, max_wal_size_kb: u64 },
}

impl CheckpointSettings {
    pub fn compute(version: EngineVersion, workload: WorkloadType) -> Self {
        let settings = if version.has_wal_size() {
            CheckpointSettings::WalSize {
                min_wal_size_kb: units::mb_to_kb(workload.min_wal_size_mb()),
                max_wal_size_kb: units::mb_to_kb(workload.max_wal_size_mb()),
            }
        } else {
            CheckpointSettings::Segments(workload.checkpoint_segments())
        };
        tracing::debug!("Checkpoint settings for {}: {:?}", version, settings);
        settings
    }

    /// Output pairs; WAL sizes are formatted, segment counts stay integers.
    pub fn to_params(self) -> Vec<(&'static str, ParamValue)> {
        match self {
            CheckpointSettings::Segments(segments) => {
                vec![("checkpoint_segments", ParamValue::from(segments))]
            }
            CheckpointSettings::WalSize {
                min_wal_size_kb,
                max_wal_size_kb,
            } => vec![
                ("min_wal_size", ParamValue::size_kb(min_wal_size_kb)),
                ("max_wal_size", ParamValue::size_kb(max_wal_size_kb)),
            ],
        }
    }
}
