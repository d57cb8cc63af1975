//! Shared test helpers for the interlock crate integration tests.
#![allow(dead_code)]

use log::Level;
use std::sync::{Arc, Mutex};

use interlock::adapters::{KernelProbe, ProcessProbe};
use interlock::checks::BootstrapCheck;
use interlock::logging::AuditSink;

/// A simple in-memory sink to capture audit lines during tests.
#[derive(Clone, Default)]
pub struct TestAudit {
    pub lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl AuditSink for TestAudit {
    fn log(&self, level: Level, msg: &str) {
        self.lines.lock().unwrap().push((level, msg.to_string()));
    }
}

impl TestAudit {
    pub fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

/// Process probe with scripted readings; defaults are all non-violating.
pub struct StubProcess {
    pub max_file_descriptor_count: i64,
    pub max_number_of_threads: i64,
    pub max_size_virtual_memory: i64,
    pub rlim_infinity: i64,
    pub memory_locked: bool,
}

impl Default for StubProcess {
    fn default() -> Self {
        Self {
            max_file_descriptor_count: 1 << 20,
            max_number_of_threads: 1 << 12,
            max_size_virtual_memory: -1,
            rlim_infinity: -1,
            memory_locked: true,
        }
    }
}

impl ProcessProbe for StubProcess {
    fn max_file_descriptor_count(&self) -> i64 {
        self.max_file_descriptor_count
    }

    fn max_number_of_threads(&self) -> i64 {
        self.max_number_of_threads
    }

    fn max_size_virtual_memory(&self) -> i64 {
        self.max_size_virtual_memory
    }

    fn rlim_infinity(&self) -> i64 {
        self.rlim_infinity
    }

    fn is_memory_locked(&self) -> bool {
        self.memory_locked
    }
}

/// Kernel probe with a scripted map count; default is non-violating.
pub struct StubKernel {
    pub max_map_count: i64,
}

impl Default for StubKernel {
    fn default() -> Self {
        Self {
            max_map_count: 1 << 18,
        }
    }
}

impl KernelProbe for StubKernel {
    fn max_map_count(&self) -> i64 {
        self.max_map_count
    }
}

/// A check with a fixed outcome, for exercising the engine itself.
pub struct StaticCheck {
    pub failing: bool,
    pub enforced: bool,
    pub message: &'static str,
}

impl StaticCheck {
    pub fn violating(message: &'static str) -> Self {
        Self {
            failing: true,
            enforced: false,
            message,
        }
    }

    pub fn passing() -> Self {
        Self {
            failing: false,
            enforced: false,
            message: "unused",
        }
    }
}

impl BootstrapCheck for StaticCheck {
    fn violated(&self) -> bool {
        self.failing
    }

    fn diagnostic(&self) -> String {
        self.message.to_string()
    }

    fn always_enforced(&self) -> bool {
        self.enforced
    }

    fn id(&self) -> &'static str {
        "static"
    }
}
