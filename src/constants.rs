//! Shared crate-wide constants for interlock.
//!
//! Centralizes the check floors and fixed diagnostic strings used across
//! modules. Adjusting these here will propagate through the crate.

/// Informational line emitted exactly once per startup invocation when the
/// bound-transport snapshot resolves to production mode.
pub const ENFORCEMENT_NOTICE: &str =
    "bound or publishing to a non-loopback or non-link-local address, enforcing bootstrap checks";

/// Summary line heading the aggregated validation failure; one diagnostic per
/// failing check follows on its own line.
pub const CHECK_FAILURE_SUMMARY: &str = "bootstrap checks failed";

/// Floor for the soft limit on open file descriptors.
pub const FILE_DESCRIPTOR_FLOOR: i64 = 1 << 16;

/// Floor used on macOS hosts, which ship a lower kern.maxfilesperproc default.
pub const OSX_FILE_DESCRIPTOR_FLOOR: i64 = 10_240;

/// Floor for the number of threads the process may create.
pub const MAX_NUMBER_OF_THREADS_FLOOR: i64 = 1 << 11;

/// Floor for the vm.max_map_count kernel tunable.
pub const MAX_MAP_COUNT_FLOOR: i64 = 1 << 18;

/// RLIM_INFINITY as reported on macOS; other hosts report -1.
pub const MACOS_RLIM_INFINITY: i64 = 9_223_372_036_854_775_807;

/// UUIDv5 namespace tag for deterministic invocation IDs.
pub const NS_TAG: &str = "https://oxidizr-arch/interlock";
