//! Process resource-limit probes.

use crate::types::Platform;

/// Accessor for per-process resource limits and memory-lock status.
pub trait ProcessProbe {
    /// Soft limit on open file descriptors; -1 when the host cannot report one.
    fn max_file_descriptor_count(&self) -> i64;

    /// Soft limit on the number of processes/threads the user may create;
    /// -1 when the host cannot report one.
    fn max_number_of_threads(&self) -> i64;

    /// Soft limit on the process address space in host-native units;
    /// `i64::MIN` when the host cannot report one.
    fn max_size_virtual_memory(&self) -> i64;

    /// The host's sentinel for an unlimited rlimit.
    fn rlim_infinity(&self) -> i64;

    /// Whether the process address space is locked into memory.
    fn is_memory_locked(&self) -> bool;
}

/// Live probe backed by getrlimit(2) and /proc/self/status.
#[derive(Copy, Clone, Debug)]
pub struct RlimitProcessProbe {
    platform: Platform,
}

impl RlimitProcessProbe {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn clamp(value: u64) -> i64 {
        i64::try_from(value).unwrap_or(i64::MAX)
    }
}

impl Default for RlimitProcessProbe {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl ProcessProbe for RlimitProcessProbe {
    fn max_file_descriptor_count(&self) -> i64 {
        match rustix::process::getrlimit(rustix::process::Resource::Nofile).current {
            Some(v) => Self::clamp(v),
            // RLIM_INFINITY: effectively unlimited, always above any floor.
            None => i64::MAX,
        }
    }

    #[cfg(target_os = "linux")]
    fn max_number_of_threads(&self) -> i64 {
        match rustix::process::getrlimit(rustix::process::Resource::Nproc).current {
            Some(v) => Self::clamp(v),
            None => i64::MAX,
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn max_number_of_threads(&self) -> i64 {
        -1
    }

    #[cfg(target_os = "linux")]
    fn max_size_virtual_memory(&self) -> i64 {
        match rustix::process::getrlimit(rustix::process::Resource::As).current {
            Some(v) => Self::clamp(v),
            None => self.rlim_infinity(),
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn max_size_virtual_memory(&self) -> i64 {
        i64::MIN
    }

    fn rlim_infinity(&self) -> i64 {
        self.platform.rlim_infinity()
    }

    fn is_memory_locked(&self) -> bool {
        locked_kb_from_status().map_or(false, |kb| kb > 0)
    }
}

/// Parse the VmLck field (kB) from /proc/self/status. Absent on hosts without
/// procfs, in which case memory is reported as not locked.
fn locked_kb_from_status() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vmlck(&status)
}

fn parse_vmlck(status: &str) -> Option<u64> {
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmLck:") {
            let value = rest.trim().trim_end_matches("kB").trim();
            return value.parse().ok();
        }
    }
    None
}
