use std::fmt;

/// Raw operating system and machine strings as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub system: String,
    pub machine: String,
}

impl HostInfo {
    pub fn new(system: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            machine: machine.into(),
        }
    }

    /// Host identity derived from the compilation target.
    ///
    /// Names are spelled the way `uname` reports them, so `macos` becomes
    /// `Darwin` and classifies the same as a live lookup would.
    pub fn from_target() -> Self {
        let system = match std::env::consts::OS {
            "macos" => "Darwin",
            "windows" => "Windows",
            "linux" => "Linux",
            other => other,
        };
        Self::new(system, std::env::consts::ARCH)
    }
}

/// Operating systems the launcher ships binaries for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Darwin,
    Linux,
}

impl Os {
    /// Classify a host system name (case-insensitive).
    ///
    /// Anything that is not Windows or Darwin is treated as Linux, including
    /// empty and unrecognized names.
    pub fn classify(system: &str) -> Self {
        match system.to_lowercase().as_str() {
            "windows" => Os::Windows,
            "darwin" => Os::Darwin,
            _ => Os::Linux,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Darwin => "darwin",
            Os::Linux => "linux",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architectures the launcher ships binaries for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Arm64,
    X86_64,
}

impl Arch {
    /// Classify a machine string (case-insensitive). Only ARM64 spellings map
    /// to `Arm64`; everything else falls back to `X86_64`.
    pub fn classify(machine: &str) -> Self {
        match machine.to_lowercase().as_str() {
            "arm64" | "aarch64" => Arch::Arm64,
            _ => Arch::X86_64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized platform used to pick a binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    pub fn from_host(host: &HostInfo) -> Self {
        Self {
            os: Os::classify(&host.system),
            arch: Arch::classify(&host.machine),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
