//! Storage media and operating system families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuneError;

/// Storage medium holding the data directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    Ssd,
    /// Network storage array
    San,
    /// Spinning disk
    Hdd,
}

impl StorageType {
    pub const ALL: [StorageType; 3] = [StorageType::Ssd, StorageType::San, StorageType::Hdd];

    pub const fn as_str(self) -> &'static str {
        match self {
            StorageType::Ssd => "ssd",
            StorageType::San => "san",
            StorageType::Hdd => "hdd",
        }
    }

    /// Planner cost of a non-sequential page fetch.
    pub const fn random_page_cost(self) -> f64 {
        match self {
            StorageType::Hdd => 4.0,
            StorageType::Ssd | StorageType::San => 1.1,
        }
    }

    /// Concurrent I/O requests the medium can absorb.
    pub const fn io_concurrency(self) -> u32 {
        match self {
            StorageType::Hdd => 2,
            StorageType::Ssd => 200,
            StorageType::San => 300,
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssd" => Ok(StorageType::Ssd),
            "san" => Ok(StorageType::San),
            "hdd" => Ok(StorageType::Hdd),
            _ => Err(TuneError::UnknownStorage(s.to_string())),
        }
    }
}

/// Operating system the server runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    #[default]
    Linux,
    Windows,
    Mac,
}

impl OsFamily {
    pub const ALL: [OsFamily; 3] = [OsFamily::Linux, OsFamily::Windows, OsFamily::Mac];

    pub const fn as_str(self) -> &'static str {
        match self {
            OsFamily::Linux => "linux",
            OsFamily::Windows => "windows",
            OsFamily::Mac => "mac",
        }
    }

    /// `effective_io_concurrency` only has an effect where posix_fadvise exists.
    pub const fn supports_io_concurrency(self) -> bool {
        matches!(self, OsFamily::Linux)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(OsFamily::Linux),
            "windows" => Ok(OsFamily::Windows),
            "mac" => Ok(OsFamily::Mac),
            _ => Err(TuneError::UnknownOsFamily(s.to_string())),
        }
    }
}
