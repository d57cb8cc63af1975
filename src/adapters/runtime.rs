//! Managed-runtime probes.
//!
//! The node supervises a managed JVM runtime; the embedding server captures a
//! [`RuntimeInfo`] snapshot from it once at startup and hands it to the check
//! catalogue. The snapshot implements [`RuntimeProbe`] directly and doubles
//! as the test seam.

use serde::{Deserialize, Serialize};

/// Accessor for managed-runtime quantities: heap configuration, VM identity,
/// collector flags, fatal-error directives, and syscall-filter status.
pub trait RuntimeProbe {
    /// Configured initial heap size in bytes; 0 when unknown.
    fn initial_heap_size(&self) -> u64;

    /// Configured maximum heap size in bytes; 0 when unknown.
    fn max_heap_size(&self) -> u64;

    fn vm_name(&self) -> String;

    fn vm_vendor(&self) -> String;

    /// Runtime version string, e.g. `25.20-b10` for HotSpot on Java 8.
    fn vm_version(&self) -> String;

    /// The UseSerialGC VM flag, rendered as `"true"` or `"false"`.
    fn use_serial_gc(&self) -> String;

    fn is_g1gc_enabled(&self) -> bool;

    fn is_java8(&self) -> bool;

    /// The OnError fatal-event directive; `None` or empty when not set.
    fn on_error(&self) -> Option<String>;

    /// The OnOutOfMemoryError fatal-event directive; `None` or empty when not set.
    fn on_out_of_memory_error(&self) -> Option<String>;

    fn is_syscall_filter_installed(&self) -> bool;
}

/// Point-in-time snapshot of the managed runtime, filled in by the embedding
/// server from its runtime handshake.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeInfo {
    pub initial_heap_size: u64,
    pub max_heap_size: u64,
    pub vm_name: String,
    pub vm_vendor: String,
    pub vm_version: String,
    pub use_serial_gc: String,
    pub g1gc_enabled: bool,
    pub java8: bool,
    pub on_error: Option<String>,
    pub on_out_of_memory_error: Option<String>,
    pub syscall_filter_installed: bool,
}

impl RuntimeProbe for RuntimeInfo {
    fn initial_heap_size(&self) -> u64 {
        self.initial_heap_size
    }

    fn max_heap_size(&self) -> u64 {
        self.max_heap_size
    }

    fn vm_name(&self) -> String {
        self.vm_name.clone()
    }

    fn vm_vendor(&self) -> String {
        self.vm_vendor.clone()
    }

    fn vm_version(&self) -> String {
        self.vm_version.clone()
    }

    fn use_serial_gc(&self) -> String {
        self.use_serial_gc.clone()
    }

    fn is_g1gc_enabled(&self) -> bool {
        self.g1gc_enabled
    }

    fn is_java8(&self) -> bool {
        self.java8
    }

    fn on_error(&self) -> Option<String> {
        self.on_error.clone()
    }

    fn on_out_of_memory_error(&self) -> Option<String> {
        self.on_out_of_memory_error.clone()
    }

    fn is_syscall_filter_installed(&self) -> bool {
        self.syscall_filter_installed
    }
}
