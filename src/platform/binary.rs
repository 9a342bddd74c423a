use super::Platform;

/// Prefix shared by every platform-specific binary
pub const BINARY_PREFIX: &str = "athira";

impl Platform {
    /// Filename of the binary built for this platform: `{prefix}-{os}-{arch}`.
    ///
    /// No executable extension is appended, on Windows either.
    pub fn binary_name(&self, prefix: &str) -> String {
        format!("{}-{}-{}", prefix, self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, HostInfo, Os};

    #[test]
    fn test_binary_name_all_platforms() {
        let cases = [
            (Os::Windows, Arch::Arm64, "athira-windows-arm64"),
            (Os::Windows, Arch::X86_64, "athira-windows-x86_64"),
            (Os::Darwin, Arch::Arm64, "athira-darwin-arm64"),
            (Os::Darwin, Arch::X86_64, "athira-darwin-x86_64"),
            (Os::Linux, Arch::Arm64, "athira-linux-arm64"),
            (Os::Linux, Arch::X86_64, "athira-linux-x86_64"),
        ];

        for (os, arch, expected) in cases {
            assert_eq!(Platform::new(os, arch).binary_name(BINARY_PREFIX), expected);
        }
    }

    #[test]
    fn test_windows_binary_has_no_extension() {
        // Unrecognized AMD64 machine string falls back to x86_64
        let platform = Platform::from_host(&HostInfo::new("Windows", "AMD64"));
        let name = platform.binary_name(BINARY_PREFIX);

        assert_eq!(name, "athira-windows-x86_64");
        assert!(!name.ends_with(".exe"));
    }

    #[test]
    fn test_binary_name_custom_prefix() {
        let platform = Platform::new(Os::Linux, Arch::X86_64);
        assert_eq!(platform.binary_name("engine"), "engine-linux-x86_64");
    }
}
