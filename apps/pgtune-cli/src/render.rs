//! Output rendering for generated settings.

use pgtune_core::tuning::KernelSettings;
use pgtune_core::{ConfigParameterSet, ParamValue, TuneRequest};
use serde::Serialize;

/// Renders settings as `postgresql.conf` lines under a summary header.
///
/// Settings without a value are written as a comment so the file stays valid.
pub fn render_conf(
    request: &TuneRequest,
    params: &ConfigParameterSet,
    kernel: Option<KernelSettings>,
) -> String {
    let hardware = &request.hardware;
    let connections = hardware
        .max_connections
        .map(|connections| format!("# Connections num: {}\n", connections))
        .unwrap_or_default();
    let mut out = format!(
        "# DB Version: {}\n# OS Type: {}\n# DB Type: {}\n# Total Memory (RAM): {} GB\n\
         # CPUs num: {}\n{}# Data Storage: {}\n\n",
        request.version,
        request.os,
        request.workload,
        hardware.total_memory_gb,
        hardware.cpu_count,
        connections,
        request.storage,
    );

    for (name, value) in params.iter() {
        let line = match value {
            ParamValue::Null => format!("# {} is not set on {}\n", name, request.os),
            value => format!("{} = {}\n", name, value),
        };
        out.push_str(&line);
    }

    if let Some(kernel) = kernel {
        out.push_str(&format!(
            "\n# Kernel shared memory (sysctl)\nkernel.shmall = {}\nkernel.shmmax = {}\n",
            kernel.shmall, kernel.shmmax
        ));
    }
    out
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    settings: &'a ConfigParameterSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    kernel: Option<JsonKernel>,
}

#[derive(Serialize)]
struct JsonKernel {
    shmall: u64,
    shmmax: u64,
}

/// Renders settings as a pretty-printed JSON object in generation order.
///
/// Kernel limits, when requested, are added under a nested `kernel` key.
pub fn render_json(
    params: &ConfigParameterSet,
    kernel: Option<KernelSettings>,
) -> serde_json::Result<String> {
    let output = JsonOutput {
        settings: params,
        kernel: kernel.map(|kernel| JsonKernel {
            shmall: kernel.shmall,
            shmmax: kernel.shmmax,
        }),
    };
    serde_json::to_string_pretty(&output)
}
