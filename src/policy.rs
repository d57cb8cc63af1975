//! Operator-facing bootstrap configuration knobs consumed by the check
//! catalogue. Consumers typically start from [`Policy::default`] and override
//! fields from their settings layer before assembling checks.

#[derive(Clone, Debug)]
pub struct Policy {
    /// Memory locking was requested for the node process; when set, startup
    /// fails if the address space did not actually get locked.
    pub memory_lock_requested: bool,
    /// A system call filter install was requested; when set, startup fails if
    /// the filter failed to install.
    pub syscall_filter_requested: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            memory_lock_requested: false,
            syscall_filter_requested: true,
        }
    }
}
