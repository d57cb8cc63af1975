//! Artifact rendering for aggregated validation failures.

use crate::types::errors::ValidationError;

/// Render the per-check causes of a [`ValidationError`] as a pretty JSON
/// array for fixtures and tooling. Order matches the supplied check order.
pub fn to_json(err: &ValidationError) -> String {
    serde_json::to_string_pretty(err.causes()).unwrap_or_else(|_| "[]".to_string())
}
