//! Host platform classification.
//!
//! The launcher only uses the classification for display and for adjusting
//! the script path handed to the interpreter; it never changes which
//! scripts run.

use std::fmt;

use crate::runtime::Runtime;

/// Set by MSYS2 and Git Bash shells on Windows.
pub const UNIX_SHELL_VAR: &str = "MSYSTEM";

/// Set inside Windows Subsystem for Linux distributions.
pub const WSL_DISTRO_VAR: &str = "WSL_DISTRO_NAME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    GitBash,
    Wsl,
    Windows,
    Linux,
    MacOs,
    Unknown,
}

impl PlatformKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::GitBash => "git-bash",
            PlatformKind::Wsl => "wsl",
            PlatformKind::Windows => "windows",
            PlatformKind::Linux => "linux",
            PlatformKind::MacOs => "macos",
            PlatformKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform information, computed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub kind: PlatformKind,
    /// Human readable name, e.g. `Git Bash (MINGW64)`.
    pub name: String,
    /// Underlying system family, e.g. `windows`, `linux`, `darwin`.
    pub system: String,
}

impl PlatformInfo {
    fn new(kind: PlatformKind, name: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            system: system.into(),
        }
    }

    fn wsl(distro: &str) -> Self {
        Self::new(PlatformKind::Wsl, format!("WSL ({})", distro), "linux")
    }
}

/// Detect the platform of the running host.
pub fn detect_platform<R: Runtime>(runtime: &R) -> PlatformInfo {
    classify(&runtime.os_family(), |key| runtime.env_var(key).ok())
}

/// Classify an OS family name plus environment into a [`PlatformInfo`].
///
/// `lookup` returns the value of an environment variable, or `None` if unset.
pub fn classify<F>(os_family: &str, lookup: F) -> PlatformInfo
where
    F: Fn(&str) -> Option<String>,
{
    let system = os_family.to_lowercase();

    match system.as_str() {
        "windows" => {
            if let Some(msystem) = lookup(UNIX_SHELL_VAR) {
                PlatformInfo::new(
                    PlatformKind::GitBash,
                    format!("Git Bash ({})", msystem),
                    "windows",
                )
            } else if let Some(distro) = lookup(WSL_DISTRO_VAR) {
                PlatformInfo::wsl(&distro)
            } else {
                PlatformInfo::new(PlatformKind::Windows, "Windows", "windows")
            }
        }
        "linux" => match lookup(WSL_DISTRO_VAR) {
            Some(distro) => PlatformInfo::wsl(&distro),
            None => PlatformInfo::new(PlatformKind::Linux, "Linux", "linux"),
        },
        "macos" | "darwin" => PlatformInfo::new(PlatformKind::MacOs, "macOS", "darwin"),
        _ => PlatformInfo::new(PlatformKind::Unknown, system.clone(), system),
    }
}
