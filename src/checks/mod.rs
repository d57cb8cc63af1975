//! Bootstrap checks and the static catalogue.
//!
//! Each check owns the probes it consults, a pass/fail predicate, and a
//! precise human-facing diagnostic. Checks never raise from [`violated`];
//! unknown probe readings are never violations. The catalogue is assembled
//! statically at the call site; there is no discovery mechanism.
//!
//! [`violated`]: BootstrapCheck::violated

use std::sync::Arc;

use crate::adapters::{KernelProbe, ProcessProbe, RuntimeProbe};
use crate::policy::Policy;
use crate::types::{ConfigError, Platform};

pub mod heap;
pub mod jvm;
pub mod limits;
pub mod syscall;

pub use heap::HeapSizeCheck;
pub use jvm::{ClientJvmCheck, G1gcCheck, UseSerialGcCheck};
pub use limits::{
    FileDescriptorCheck, MaxMapCountCheck, MaxNumberOfThreadsCheck, MaxSizeVirtualMemoryCheck,
    MlockallCheck,
};
pub use syscall::{OnErrorCheck, OnOutOfMemoryErrorCheck, SystemCallFilterCheck};

/// The unit of validation. Invoking any operation must not mutate observable
/// state; a check is a pure function of the probes it closes over.
pub trait BootstrapCheck {
    /// True when the probed environment violates this check's predicate.
    fn violated(&self) -> bool;

    /// Non-empty description of the failure; only consulted on violation.
    fn diagnostic(&self) -> String;

    /// Checks guarding invariants that are unsafe to ignore even in
    /// development fire regardless of enforcement mode.
    fn always_enforced(&self) -> bool {
        false
    }

    /// Stable identifier used in aggregated diagnostics.
    fn id(&self) -> &'static str;
}

/// Assemble the standard ordered check set for node startup. The order here
/// is the order diagnostics appear in on failure.
pub fn startup_checks(
    policy: &Policy,
    platform: Platform,
    process: Arc<dyn ProcessProbe>,
    kernel: Arc<dyn KernelProbe>,
    runtime: Arc<dyn RuntimeProbe>,
) -> Result<Vec<Box<dyn BootstrapCheck>>, ConfigError> {
    let checks: Vec<Box<dyn BootstrapCheck>> = vec![
        Box::new(HeapSizeCheck::new(Arc::clone(&runtime))),
        Box::new(FileDescriptorCheck::for_platform(
            Arc::clone(&process),
            platform,
        )?),
        Box::new(MlockallCheck::new(
            policy.memory_lock_requested,
            Arc::clone(&process),
        )),
        Box::new(MaxNumberOfThreadsCheck::new(Arc::clone(&process))),
        Box::new(MaxSizeVirtualMemoryCheck::new(Arc::clone(&process))),
        Box::new(MaxMapCountCheck::new(kernel)),
        Box::new(ClientJvmCheck::new(Arc::clone(&runtime))),
        Box::new(UseSerialGcCheck::new(Arc::clone(&runtime))),
        Box::new(SystemCallFilterCheck::new(
            policy.syscall_filter_requested,
            Arc::clone(&runtime),
        )),
        Box::new(OnErrorCheck::new(Arc::clone(&runtime))),
        Box::new(OnOutOfMemoryErrorCheck::new(Arc::clone(&runtime))),
        Box::new(G1gcCheck::new(runtime)),
    ];
    Ok(checks)
}
