//! Supported PostgreSQL engine versions and their built-in parallelism defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuneError;

/// PostgreSQL release the configuration targets.
///
/// Variants are declared oldest first so the derived `Ord` gives release
/// order; feature gates compare variants, never floating point numbers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EngineVersion {
    #[serde(rename = "9.2")]
    V9_2,
    #[serde(rename = "9.3")]
    V9_3,
    #[serde(rename = "9.4")]
    V9_4,
    #[serde(rename = "9.5")]
    V9_5,
    #[serde(rename = "9.6")]
    V9_6,
    #[serde(rename = "10")]
    V10,
    #[serde(rename = "11")]
    V11,
    #[serde(rename = "12")]
    V12,
    #[default]
    #[serde(rename = "13")]
    V13,
}

impl EngineVersion {
    /// Every supported version, oldest first.
    pub const ALL: [EngineVersion; 9] = [
        EngineVersion::V9_2,
        EngineVersion::V9_3,
        EngineVersion::V9_4,
        EngineVersion::V9_5,
        EngineVersion::V9_6,
        EngineVersion::V10,
        EngineVersion::V11,
        EngineVersion::V12,
        EngineVersion::V13,
    ];

    /// `(major, minor)` pair; minor is 0 from 10 onwards.
    pub const fn major_minor(self) -> (u8, u8) {
        match self {
            EngineVersion::V9_2 => (9, 2),
            EngineVersion::V9_3 => (9, 3),
            EngineVersion::V9_4 => (9, 4),
            EngineVersion::V9_5 => (9, 5),
            EngineVersion::V9_6 => (9, 6),
            EngineVersion::V10 => (10, 0),
            EngineVersion::V11 => (11, 0),
            EngineVersion::V12 => (12, 0),
            EngineVersion::V13 => (13, 0),
        }
    }

    /// Whether `min_wal_size`/`max_wal_size` replace `checkpoint_segments`.
    pub fn has_wal_size(self) -> bool {
        self >= EngineVersion::V9_5
    }

    /// Built-in parallelism defaults the engine ships with at this version.
    pub fn defaults(self) -> &'static VersionDefaults {
        VERSION_DEFAULTS
            .iter()
            .rev()
            .find(|(since, _)| *since <= self)
            .map(|(_, defaults)| defaults)
            .unwrap_or(&VersionDefaults::NONE)
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.major_minor() {
            (major, minor) if major < 10 => write!(f, "{}.{}", major, minor),
            (major, _) => write!(f, "{}", major),
        }
    }
}

impl FromStr for EngineVersion {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // "13.0" and "13" name the same release.
        let normalized = trimmed.strip_suffix(".0").unwrap_or(trimmed);
        EngineVersion::ALL
            .into_iter()
            .find(|version| version.to_string() == normalized)
            .ok_or_else(|| TuneError::UnknownEngineVersion(s.to_string()))
    }
}

/// Parallelism settings an engine version uses when left unconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionDefaults {
    pub max_worker_processes: Option<u32>,
    pub max_parallel_workers_per_gather: Option<u32>,
    pub max_parallel_workers: Option<u32>,
}

impl VersionDefaults {
    /// Versions without background worker settings.
    pub const NONE: VersionDefaults = VersionDefaults {
        max_worker_processes: None,
        max_parallel_workers_per_gather: None,
        max_parallel_workers: None,
    };
}

/// Defaults keyed by the first version they apply to, oldest first.
static VERSION_DEFAULTS: &[(EngineVersion, VersionDefaults)] = &[
    (
        EngineVersion::V9_5,
        VersionDefaults {
            max_worker_processes: Some(8),
            max_parallel_workers_per_gather: None,
            max_parallel_workers: None,
        },
    ),
    (
        EngineVersion::V9_6,
        VersionDefaults {
            max_worker_processes: Some(8),
            max_parallel_workers_per_gather: Some(0),
            max_parallel_workers: None,
        },
    ),
    (
        EngineVersion::V10,
        VersionDefaults {
            max_worker_processes: Some(8),
            max_parallel_workers_per_gather: Some(2),
            max_parallel_workers: Some(8),
        },
    ),
];
