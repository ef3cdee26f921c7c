use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use pgtune_core::types::{
    EngineVersion, HardwareProfile, OsFamily, StorageType, WorkloadType, MAX_TOTAL_MEMORY_GB,
};
use pgtune_core::TuneRequest;

/// Recommend PostgreSQL settings for a server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// PostgreSQL version (9.2 - 13)
    #[arg(long)]
    pub dbver: Option<EngineVersion>,

    /// Operating system: linux, windows or mac
    #[arg(long)]
    pub ostype: Option<OsFamily>,

    /// Workload: web, oltp, dw, desktop or mixed
    #[arg(long)]
    pub dbtype: Option<WorkloadType>,

    /// Data storage: ssd, san or hdd
    #[arg(long)]
    pub hdtype: Option<StorageType>,

    /// Total memory in GB
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TOTAL_MEMORY_GB))]
    pub ram: Option<u64>,

    /// Number of CPUs PostgreSQL can use (threads per core * cores per socket * sockets)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub cpunum: Option<u32>,

    /// Maximum number of client connections
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub connectionnum: Option<u32>,

    /// JSON file with a base request; flags override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Conf)]
    pub format: OutputFormat,

    /// Also print kernel shared memory limits
    #[arg(long)]
    pub kernel: bool,

    /// Log derivation steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// postgresql.conf lines
    Conf,
    /// JSON object
    Json,
}

impl Cli {
    /// Builds the request from the config file (if any) and flags.
    pub fn to_request(&self) -> anyhow::Result<TuneRequest> {
        let base = match &self.config {
            Some(path) => Some(load_request(path)?),
            None => None,
        };

        let hardware = match (base.map(|request| request.hardware), self.ram, self.cpunum) {
            (_, Some(ram), Some(cpus)) => HardwareProfile::new(ram, cpus)?,
            (Some(hardware), ram, cpus) => HardwareProfile::new(
                ram.unwrap_or(hardware.total_memory_gb),
                cpus.unwrap_or(hardware.cpu_count),
            )?,
            (None, None, _) => bail!("--ram is required when no --config file is given"),
            (None, _, None) => bail!("--cpunum is required when no --config file is given"),
        };

        let connections = self
            .connectionnum
            .or_else(|| base.and_then(|request| request.hardware.max_connections));
        let hardware = match connections {
            Some(connections) => hardware.with_max_connections(connections)?,
            None => hardware,
        };

        let mut request = base.map_or_else(
            || TuneRequest::new(hardware),
            |base| TuneRequest { hardware, ..base },
        );
        if let Some(version) = self.dbver {
            request.version = version;
        }
        if let Some(os) = self.ostype {
            request.os = os;
        }
        if let Some(workload) = self.dbtype {
            request.workload = workload;
        }
        if let Some(storage) = self.hdtype {
            request.storage = storage;
        }
        Ok(request)
    }
}

fn load_request(path: &Path) -> anyhow::Result<TuneRequest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let request: TuneRequest = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    request
        .validate()
        .with_context(|| format!("Invalid hardware in config file {}", path.display()))?;
    tracing::debug!("Loaded base request from {}", path.display());
    Ok(request)
}
