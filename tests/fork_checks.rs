//! Syscall-filter install status and the always-enforced fork-risk family.

use std::sync::Arc;

use interlock::adapters::{RuntimeInfo, RuntimeProbe};
use interlock::checks::{
    BootstrapCheck, OnErrorCheck, OnOutOfMemoryErrorCheck, SystemCallFilterCheck,
};
use interlock::{check, EnforcementMode};

fn run_single(
    mode: EnforcementMode,
    check_impl: impl BootstrapCheck + 'static,
) -> Result<(), String> {
    let checks: Vec<Box<dyn BootstrapCheck>> = vec![Box::new(check_impl)];
    check(mode, &checks, "fork_checks").map_err(|e| e.message().to_string())
}

#[test]
fn requested_filter_must_install() {
    let runtime = Arc::new(RuntimeInfo {
        syscall_filter_installed: false,
        ..RuntimeInfo::default()
    });
    let message =
        run_single(EnforcementMode::Production, SystemCallFilterCheck::new(true, runtime))
            .unwrap_err();
    assert!(message.contains(
        "system call filters failed to install; check the logs and fix your \
         configuration or disable system call filters at your own risk"
    ));

    let runtime = Arc::new(RuntimeInfo {
        syscall_filter_installed: true,
        ..RuntimeInfo::default()
    });
    run_single(EnforcementMode::Production, SystemCallFilterCheck::new(true, runtime)).unwrap();

    // not requested: install status is irrelevant
    for installed in [true, false] {
        let runtime = Arc::new(RuntimeInfo {
            syscall_filter_installed: installed,
            ..RuntimeInfo::default()
        });
        run_single(EnforcementMode::Production, SystemCallFilterCheck::new(false, runtime))
            .unwrap();
    }
}

#[test]
fn on_error_under_filter_fails_even_in_development() {
    let runtime: Arc<dyn RuntimeProbe> = Arc::new(RuntimeInfo {
        syscall_filter_installed: true,
        on_error: Some("kill -9 %p".to_string()),
        ..RuntimeInfo::default()
    });
    for mode in [EnforcementMode::Development, EnforcementMode::Production] {
        let message = run_single(mode, OnErrorCheck::new(Arc::clone(&runtime))).unwrap_err();
        assert!(message.contains(
            "OnError [kill -9 %p] requires forking but is prevented by system \
             call filters ([bootstrap.seccomp=true]); upgrade to at least \
             Java 8u92 and use ExitOnOutOfMemoryError"
        ));
    }
}

#[test]
fn on_error_without_filter_passes() {
    let runtime: Arc<dyn RuntimeProbe> = Arc::new(RuntimeInfo {
        syscall_filter_installed: false,
        on_error: Some("kill -9 %p".to_string()),
        ..RuntimeInfo::default()
    });
    run_single(EnforcementMode::Development, OnErrorCheck::new(Arc::clone(&runtime))).unwrap();
    run_single(EnforcementMode::Production, OnErrorCheck::new(runtime)).unwrap();
}

#[test]
fn unset_and_empty_directives_pass() {
    for directive in [None, Some(String::new())] {
        let runtime: Arc<dyn RuntimeProbe> = Arc::new(RuntimeInfo {
            syscall_filter_installed: true,
            on_error: directive.clone(),
            on_out_of_memory_error: directive,
            ..RuntimeInfo::default()
        });
        run_single(EnforcementMode::Production, OnErrorCheck::new(Arc::clone(&runtime))).unwrap();
        run_single(EnforcementMode::Production, OnOutOfMemoryErrorCheck::new(runtime)).unwrap();
    }
}

#[test]
fn on_out_of_memory_error_under_filter_fails_in_both_modes() {
    let runtime: Arc<dyn RuntimeProbe> = Arc::new(RuntimeInfo {
        syscall_filter_installed: true,
        on_out_of_memory_error: Some("jmap -dump %p".to_string()),
        ..RuntimeInfo::default()
    });
    for mode in [EnforcementMode::Development, EnforcementMode::Production] {
        let message =
            run_single(mode, OnOutOfMemoryErrorCheck::new(Arc::clone(&runtime))).unwrap_err();
        assert!(message.contains("OnOutOfMemoryError [jmap -dump %p]"));
        assert!(message.contains("upgrade to at least Java 8u92"));
    }
}
