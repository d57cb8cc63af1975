//! System-call-filter checks and the fork-risk family.
//!
//! A runtime configured to fork on a fatal event while the sandbox forbids
//! forking will die uncleanly at the worst possible moment, so the fork-risk
//! checks are enforced in every mode.

use std::sync::Arc;

use super::BootstrapCheck;
use crate::adapters::RuntimeProbe;

pub struct SystemCallFilterCheck {
    requested: bool,
    runtime: Arc<dyn RuntimeProbe>,
}

impl SystemCallFilterCheck {
    pub fn new(requested: bool, runtime: Arc<dyn RuntimeProbe>) -> Self {
        Self { requested, runtime }
    }
}

impl BootstrapCheck for SystemCallFilterCheck {
    fn violated(&self) -> bool {
        self.requested && !self.runtime.is_syscall_filter_installed()
    }

    fn diagnostic(&self) -> String {
        "system call filters failed to install; check the logs and fix your \
         configuration or disable system call filters at your own risk"
            .to_string()
    }

    fn id(&self) -> &'static str {
        "system_call_filter"
    }
}

// A directive forks iff it is set to a non-empty command.
fn fork_prevented(runtime: &dyn RuntimeProbe, directive: Option<String>) -> bool {
    runtime.is_syscall_filter_installed() && directive.is_some_and(|cmd| !cmd.is_empty())
}

pub struct OnErrorCheck {
    runtime: Arc<dyn RuntimeProbe>,
}

impl OnErrorCheck {
    pub fn new(runtime: Arc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl BootstrapCheck for OnErrorCheck {
    fn violated(&self) -> bool {
        fork_prevented(&*self.runtime, self.runtime.on_error())
    }

    fn diagnostic(&self) -> String {
        format!(
            "OnError [{}] requires forking but is prevented by system call \
             filters ([bootstrap.seccomp=true]); upgrade to at least Java 8u92 \
             and use ExitOnOutOfMemoryError",
            self.runtime.on_error().unwrap_or_default()
        )
    }

    fn always_enforced(&self) -> bool {
        true
    }

    fn id(&self) -> &'static str {
        "on_error"
    }
}

pub struct OnOutOfMemoryErrorCheck {
    runtime: Arc<dyn RuntimeProbe>,
}

impl OnOutOfMemoryErrorCheck {
    pub fn new(runtime: Arc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl BootstrapCheck for OnOutOfMemoryErrorCheck {
    fn violated(&self) -> bool {
        fork_prevented(&*self.runtime, self.runtime.on_out_of_memory_error())
    }

    fn diagnostic(&self) -> String {
        format!(
            "OnOutOfMemoryError [{}] requires forking but is prevented by \
             system call filters ([bootstrap.seccomp=true]); upgrade to at \
             least Java 8u92 and use ExitOnOutOfMemoryError",
            self.runtime.on_out_of_memory_error().unwrap_or_default()
        )
    }

    fn always_enforced(&self) -> bool {
        true
    }

    fn id(&self) -> &'static str {
        "on_out_of_memory_error"
    }
}
