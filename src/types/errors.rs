//! Error types used across interlock.
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::constants::CHECK_FAILURE_SUMMARY;

/// Raised synchronously from check constructors when handed an unusable
/// parameter. Never aggregated into a [`ValidationError`].
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct ConfigError {
    pub msg: String,
}

/// One failing bootstrap check, preserved verbatim inside a
/// [`ValidationError`]. `Display` is the diagnostic alone so programmatic
/// consumers can enumerate violations individually.
#[derive(Clone, Debug, Error, Serialize)]
#[error("{diagnostic}")]
pub struct Violation {
    /// Stable identifier of the failing check.
    pub check: String,
    /// Human-facing description of the failure.
    pub diagnostic: String,
}

/// Aggregated startup validation failure: a summary line followed by one
/// diagnostic per failing check, in the order the checks were supplied.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    context: String,
    invocation: Uuid,
    causes: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(context: &str, causes: Vec<Violation>) -> Self {
        let mut message = String::from(CHECK_FAILURE_SUMMARY);
        for violation in &causes {
            message.push('\n');
            message.push_str(&violation.diagnostic);
        }
        let invocation = crate::types::ids::invocation_id(context, &causes);
        Self {
            message,
            context: context.to_string(),
            invocation,
            causes,
        }
    }

    /// The composite multi-line message, one line per violation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Call-site label supplied to the engine invocation.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Deterministic identifier for this failure; stable across re-runs with
    /// identical probe outputs.
    pub fn invocation_id(&self) -> Uuid {
        self.invocation
    }

    /// Per-check causes in supplied check order, diagnostics verbatim.
    pub fn causes(&self) -> &[Violation] {
        &self.causes
    }
}
