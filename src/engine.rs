//! Bootstrap check engine.
//!
//! Side-effects:
//! - Emits exactly one informational line when a bound-transport snapshot
//!   resolves to production mode; nothing else is logged.
//! - Returns a single [`ValidationError`] aggregating every violation in
//!   supplied check order, or `Ok(())`.
//!
//! The engine is synchronous and single-threaded; it runs once on the startup
//! thread before any transport listener accepts connections. Re-invocation is
//! deterministic given identical probe outputs.

use log::Level;

use crate::checks::BootstrapCheck;
use crate::constants::ENFORCEMENT_NOTICE;
use crate::logging::AuditSink;
use crate::transport::{is_local_address, BoundTransport};
use crate::types::{ValidationError, Violation};

/// Whether the full check set applies. Derived from the bound-transport
/// snapshot, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnforcementMode {
    Development,
    Production,
}

/// True iff any bound address is non-local or the publish address is
/// non-local. A node reachable only via loopback/link-local is
/// developer-local and exempt from strict environmental demands.
pub fn enforce_limits(transport: &BoundTransport) -> bool {
    transport
        .bound_addresses()
        .iter()
        .any(|addr| !is_local_address(addr.ip()))
        || !is_local_address(transport.publish_address().ip())
}

pub fn enforcement_mode(transport: &BoundTransport) -> EnforcementMode {
    if enforce_limits(transport) {
        EnforcementMode::Production
    } else {
        EnforcementMode::Development
    }
}

/// Startup entry point: resolve the enforcement mode from the transport
/// snapshot, announce enforcement when production mode applies, then run the
/// checks.
pub fn check_startup(
    transport: &BoundTransport,
    checks: &[Box<dyn BootstrapCheck>],
    audit: &dyn AuditSink,
    context: &str,
) -> Result<(), ValidationError> {
    let mode = enforcement_mode(transport);
    if mode == EnforcementMode::Production {
        audit.log(Level::Info, ENFORCEMENT_NOTICE);
    }
    check(mode, checks, context)
}

/// Direct form used by tests and embedding harnesses; performs no logging.
///
/// A check is consulted iff the mode is production or the check is
/// always-enforced. Each check runs at most once, in supplied order, and
/// every violation is preserved, duplicates included.
pub fn check(
    mode: EnforcementMode,
    checks: &[Box<dyn BootstrapCheck>],
    context: &str,
) -> Result<(), ValidationError> {
    let mut violations: Vec<Violation> = Vec::new();
    for check in checks {
        if mode != EnforcementMode::Production && !check.always_enforced() {
            continue;
        }
        if check.violated() {
            violations.push(Violation {
                check: check.id().to_string(),
                diagnostic: check.diagnostic(),
            });
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(context, violations))
    }
}
