//! Formula and lookup-table engine for PostgreSQL configuration tuning.
//!
//! Maps engine version, operating system, workload, storage medium and
//! hardware facts to recommended memory, parallelism and checkpoint settings.

pub mod assembler;
pub mod config;
pub mod error;
pub mod params;
pub mod tuning;
pub mod types;
pub mod units;

pub use assembler::{generate, kernel_settings};
pub use config::TuneRequest;
pub use error::{Result, TuneError};
pub use params::{ConfigParameterSet, ParamValue};
