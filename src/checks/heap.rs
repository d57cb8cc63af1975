//! Heap configuration checks.

use std::sync::Arc;

use super::BootstrapCheck;
use crate::adapters::RuntimeProbe;

/// Mismatched initial and maximum heap sizes cause resize pauses at steady
/// state; both must be pinned to the same value. Skipped when either size is
/// unknown (reported as 0).
pub struct HeapSizeCheck {
    runtime: Arc<dyn RuntimeProbe>,
}

impl HeapSizeCheck {
    pub fn new(runtime: Arc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl BootstrapCheck for HeapSizeCheck {
    fn violated(&self) -> bool {
        let initial = self.runtime.initial_heap_size();
        let max = self.runtime.max_heap_size();
        initial != 0 && max != 0 && initial != max
    }

    fn diagnostic(&self) -> String {
        format!(
            "initial heap size [{}] not equal to maximum heap size [{}]; \
             these values must be set to the same value",
            self.runtime.initial_heap_size(),
            self.runtime.max_heap_size()
        )
    }

    fn id(&self) -> &'static str {
        "heap_size"
    }
}
