#![forbid(unsafe_code)]
//! Interlock: pre-start environment validation for server nodes.
//!
//! Before a node opens its transport to non-local peers, the engine runs a
//! suite of independent bootstrap checks against the host OS, the process
//! resource limits, and the managed runtime. Every violation is collected and
//! reported as a single aggregated failure; a node reachable only via
//! loopback or link-local addresses is exempt from all but the
//! always-enforced checks.
//!
//! Model highlights:
//! - Checks are pure functions of injected probes; probes never raise and
//!   report documented "unknown" sentinels the engine treats as a pass.
//! - The engine is synchronous, runs each check at most once per invocation,
//!   and preserves caller-supplied check order in the aggregated diagnostic.
//! - This crate forbids `unsafe` and uses `rustix` for syscalls.

pub mod adapters;
pub mod checks;
pub mod constants;
pub mod engine;
pub mod logging;
pub mod policy;
pub mod transport;
pub mod types;

pub use engine::{check, check_startup, enforce_limits, enforcement_mode, EnforcementMode};
