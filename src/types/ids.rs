use uuid::Uuid;

use super::errors::Violation;
// UUIDv5 namespace tag for deterministic invocation IDs.
use crate::constants::NS_TAG;

fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Deterministic identifier for one engine invocation, derived from the
/// call-site context and the failing check ids in supplied order.
pub fn invocation_id(context: &str, causes: &[Violation]) -> Uuid {
    let ns = namespace();
    let mut s = String::new();
    s.push_str(context);
    s.push('\n');
    for violation in causes {
        s.push_str(&violation.check);
        s.push('\n');
    }
    Uuid::new_v5(&ns, s.as_bytes())
}
