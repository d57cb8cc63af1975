use crate::constants::{FILE_DESCRIPTOR_FLOOR, MACOS_RLIM_INFINITY, OSX_FILE_DESCRIPTOR_FLOOR};

/// Host platform descriptor injected into platform-conditional checks, so the
/// checks themselves stay testable cross-platform without recompilation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Other,
}

impl Platform {
    /// Detect the platform this process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// The host's sentinel for an unlimited rlimit.
    pub fn rlim_infinity(self) -> i64 {
        match self {
            Platform::MacOs => MACOS_RLIM_INFINITY,
            Platform::Linux | Platform::Other => -1,
        }
    }

    /// Floor for the open-file-descriptor soft limit on this host.
    pub fn file_descriptor_floor(self) -> i64 {
        match self {
            Platform::MacOs => OSX_FILE_DESCRIPTOR_FLOOR,
            Platform::Linux | Platform::Other => FILE_DESCRIPTOR_FLOOR,
        }
    }
}
