//! Probe interfaces and their host-side implementations.
//!
//! Probes are pure reads of live OS/runtime quantities, injected into checks
//! so the checks stay deterministic functions of their readings. A probe that
//! cannot report a value returns its documented "unknown" sentinel instead of
//! raising; the checks treat unknown as a pass.

pub mod kernel;
pub mod process;
pub mod runtime;

pub use kernel::{KernelProbe, ProcfsKernelProbe};
pub use process::{ProcessProbe, RlimitProcessProbe};
pub use runtime::{RuntimeInfo, RuntimeProbe};
