//! Kernel shared memory limits (`kernel.shmall`, `kernel.shmmax`).

/// Page size `shmall` is counted in.
const SHMALL_PAGE_BYTES: u64 = 8192;
const SHMMAX_PAGE_BYTES: u64 = 4096;

pub fn kernel_shmall(total_memory_bytes: u64) -> u64 {
    total_memory_bytes / SHMALL_PAGE_BYTES
}

pub fn kernel_shmmax(shmall: u64) -> u64 {
    shmall * SHMMAX_PAGE_BYTES
}

/// Both limits for a machine with `total_memory_bytes` of RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelSettings {
    pub shmall: u64,
    pub shmmax: u64,
}

impl KernelSettings {
    pub fn compute(total_memory_bytes: u64) -> Self {
        let shmall = kernel_shmall(total_memory_bytes);
        Self {
            shmall,
            shmmax: kernel_shmmax(shmall),
        }
    }
}
