//! Kernel tunable probes.

use std::path::PathBuf;

/// Accessor for kernel tunables consulted at bootstrap.
pub trait KernelProbe {
    /// The vm.max_map_count tunable; -1 on hosts that do not expose it.
    fn max_map_count(&self) -> i64;
}

/// Live probe reading vm.max_map_count from procfs. The path is injectable so
/// tests can point the probe at a fixture file.
#[derive(Clone, Debug)]
pub struct ProcfsKernelProbe {
    max_map_count_path: PathBuf,
}

impl ProcfsKernelProbe {
    pub fn new() -> Self {
        Self::with_path("/proc/sys/vm/max_map_count")
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            max_map_count_path: path.into(),
        }
    }
}

impl Default for ProcfsKernelProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelProbe for ProcfsKernelProbe {
    fn max_map_count(&self) -> i64 {
        match std::fs::read_to_string(&self.max_map_count_path) {
            Ok(raw) => raw.trim().parse().unwrap_or(-1),
            Err(_) => -1,
        }
    }
}
