//! Managed-runtime configuration checks.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;

use super::BootstrapCheck;
use crate::adapters::RuntimeProbe;

/// HotSpot runtime versions on Java 8 carry major version 25; updates before
/// 40 corrupt data under G1GC. Compiled once at first use.
static HOTSPOT8_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^25\.(\d+)-b\d+$").expect("version regex is valid"));

pub struct ClientJvmCheck {
    runtime: Arc<dyn RuntimeProbe>,
}

impl ClientJvmCheck {
    pub fn new(runtime: Arc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl BootstrapCheck for ClientJvmCheck {
    fn violated(&self) -> bool {
        self.runtime.vm_name().contains("Client VM")
    }

    fn diagnostic(&self) -> String {
        format!(
            "JVM is using the client VM [{}] but should be using a server VM \
             for the best performance",
            self.runtime.vm_name()
        )
    }

    fn id(&self) -> &'static str {
        "client_jvm"
    }
}

pub struct UseSerialGcCheck {
    runtime: Arc<dyn RuntimeProbe>,
}

impl UseSerialGcCheck {
    pub fn new(runtime: Arc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl BootstrapCheck for UseSerialGcCheck {
    fn violated(&self) -> bool {
        self.runtime.use_serial_gc() == "true"
    }

    fn diagnostic(&self) -> String {
        format!(
            "JVM is using the serial collector but should not be for the best \
             performance; either it's the default for the VM [{}] or \
             -XX:+UseSerialGC was explicitly specified",
            self.runtime.vm_name()
        )
    }

    fn id(&self) -> &'static str {
        "use_serial_gc"
    }
}

/// Early Java 8 HotSpot builds corrupt data under G1GC. Fires only on Oracle
/// VMs reporting Java 8 with G1 enabled and an update before 40; any other
/// version shape is a pass.
pub struct G1gcCheck {
    runtime: Arc<dyn RuntimeProbe>,
}

impl G1gcCheck {
    pub fn new(runtime: Arc<dyn RuntimeProbe>) -> Self {
        Self { runtime }
    }
}

impl BootstrapCheck for G1gcCheck {
    fn violated(&self) -> bool {
        if !self.runtime.vm_vendor().starts_with("Oracle") {
            return false;
        }
        if !self.runtime.is_java8() {
            return false;
        }
        if !self.runtime.is_g1gc_enabled() {
            return false;
        }
        let version = self.runtime.vm_version();
        match HOTSPOT8_VERSION.captures(&version) {
            Some(caps) => caps[1].parse::<u64>().is_ok_and(|update| update < 40),
            None => false,
        }
    }

    fn diagnostic(&self) -> String {
        format!(
            "JVM version [{}] can cause data corruption when used with G1GC; \
             upgrade to at least Java 8u40",
            self.runtime.vm_version()
        )
    }

    fn id(&self) -> &'static str {
        "g1gc"
    }
}
