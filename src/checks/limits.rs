//! Process and kernel resource-limit checks.

use std::sync::Arc;

use super::BootstrapCheck;
use crate::adapters::{KernelProbe, ProcessProbe};
use crate::constants::{MAX_MAP_COUNT_FLOOR, MAX_NUMBER_OF_THREADS_FLOOR};
use crate::types::{ConfigError, Platform};

/// The node opens many files and sockets; a low descriptor limit surfaces as
/// spurious failures under load instead of at startup.
pub struct FileDescriptorCheck {
    process: Arc<dyn ProcessProbe>,
    limit: i64,
}

impl std::fmt::Debug for FileDescriptorCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDescriptorCheck")
            .field("limit", &self.limit)
            .finish()
    }
}

impl FileDescriptorCheck {
    /// Floor selected by host platform: macOS ships a lower per-process default.
    pub fn for_platform(
        process: Arc<dyn ProcessProbe>,
        platform: Platform,
    ) -> Result<Self, ConfigError> {
        Self::with_limit(process, platform.file_descriptor_floor())
    }

    pub fn with_limit(process: Arc<dyn ProcessProbe>, limit: i64) -> Result<Self, ConfigError> {
        if limit <= 0 {
            return Err(ConfigError {
                msg: format!("limit must be positive but was [{limit}]"),
            });
        }
        Ok(Self { process, limit })
    }
}

impl BootstrapCheck for FileDescriptorCheck {
    fn violated(&self) -> bool {
        let count = self.process.max_file_descriptor_count();
        count >= 0 && count < self.limit
    }

    fn diagnostic(&self) -> String {
        format!(
            "max file descriptors [{}] for elasticsearch process is too low, \
             increase to at least [{}]",
            self.process.max_file_descriptor_count(),
            self.limit
        )
    }

    fn id(&self) -> &'static str {
        "file_descriptor"
    }
}

/// When the operator requested memory locking, a silently unlocked address
/// space means the node will swap under pressure.
pub struct MlockallCheck {
    requested: bool,
    process: Arc<dyn ProcessProbe>,
}

impl MlockallCheck {
    pub fn new(requested: bool, process: Arc<dyn ProcessProbe>) -> Self {
        Self { requested, process }
    }
}

impl BootstrapCheck for MlockallCheck {
    fn violated(&self) -> bool {
        self.requested && !self.process.is_memory_locked()
    }

    fn diagnostic(&self) -> String {
        "memory locking requested for elasticsearch process but memory is not locked".to_string()
    }

    fn id(&self) -> &'static str {
        "memory_lock"
    }
}

pub struct MaxNumberOfThreadsCheck {
    process: Arc<dyn ProcessProbe>,
}

impl MaxNumberOfThreadsCheck {
    pub fn new(process: Arc<dyn ProcessProbe>) -> Self {
        Self { process }
    }
}

impl BootstrapCheck for MaxNumberOfThreadsCheck {
    fn violated(&self) -> bool {
        let threads = self.process.max_number_of_threads();
        threads >= 0 && threads < MAX_NUMBER_OF_THREADS_FLOOR
    }

    fn diagnostic(&self) -> String {
        format!(
            "max number of threads [{}] is too low, increase to at least [{}]",
            self.process.max_number_of_threads(),
            MAX_NUMBER_OF_THREADS_FLOOR
        )
    }

    fn id(&self) -> &'static str {
        "max_number_of_threads"
    }
}

/// Any finite address-space limit can fail mmap at an arbitrary later point;
/// the limit must be unlimited.
pub struct MaxSizeVirtualMemoryCheck {
    process: Arc<dyn ProcessProbe>,
}

impl MaxSizeVirtualMemoryCheck {
    pub fn new(process: Arc<dyn ProcessProbe>) -> Self {
        Self { process }
    }
}

impl BootstrapCheck for MaxSizeVirtualMemoryCheck {
    fn violated(&self) -> bool {
        let size = self.process.max_size_virtual_memory();
        size != i64::MIN && size != self.process.rlim_infinity()
    }

    fn diagnostic(&self) -> String {
        format!(
            "max size virtual memory [{}] should be unlimited, set to [unlimited]",
            self.process.max_size_virtual_memory()
        )
    }

    fn id(&self) -> &'static str {
        "max_size_virtual_memory"
    }
}

pub struct MaxMapCountCheck {
    kernel: Arc<dyn KernelProbe>,
}

impl MaxMapCountCheck {
    pub fn new(kernel: Arc<dyn KernelProbe>) -> Self {
        Self { kernel }
    }
}

impl BootstrapCheck for MaxMapCountCheck {
    fn violated(&self) -> bool {
        let count = self.kernel.max_map_count();
        count >= 0 && count < MAX_MAP_COUNT_FLOOR
    }

    fn diagnostic(&self) -> String {
        format!(
            "max virtual memory areas vm.max_map_count [{}] is too low, \
             increase to at least [{}]",
            self.kernel.max_map_count(),
            MAX_MAP_COUNT_FLOOR
        )
    }

    fn id(&self) -> &'static str {
        "max_map_count"
    }
}
