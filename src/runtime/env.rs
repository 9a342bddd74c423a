//! Host identity and launcher location.

use log::warn;
use std::env;
use std::io;
use std::path::PathBuf;

use super::RealRuntime;
use crate::platform::HostInfo;

impl RealRuntime {
    #[cfg(unix)]
    #[tracing::instrument(skip(self))]
    pub(crate) fn host_info_impl(&self) -> HostInfo {
        match nix::sys::utsname::uname() {
            Ok(uts) => HostInfo::new(
                uts.sysname().to_string_lossy(),
                uts.machine().to_string_lossy(),
            ),
            Err(err) => {
                warn!("uname failed ({}), using compile-time platform", err);
                HostInfo::from_target()
            }
        }
    }

    #[cfg(not(unix))]
    #[tracing::instrument(skip(self))]
    pub(crate) fn host_info_impl(&self) -> HostInfo {
        HostInfo::from_target()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn current_exe_impl(&self) -> io::Result<PathBuf> {
        env::current_exe()
    }
}

#[cfg(test)]
mod tests {
    use crate::platform::{HostInfo, Os, Platform};
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_real_runtime_host_info() {
        let runtime = RealRuntime;
        let host = runtime.host_info();

        assert!(!host.system.is_empty());
        assert!(!host.machine.is_empty());

        // A live lookup classifies the same OS as the compilation target
        let live = Platform::from_host(&host);
        let target = Platform::from_host(&HostInfo::from_target());
        assert_eq!(live.os, target.os);

        #[cfg(target_os = "linux")]
        assert_eq!(live.os, Os::Linux);

        #[cfg(target_os = "macos")]
        assert_eq!(live.os, Os::Darwin);
    }

    #[test]
    fn test_real_runtime_current_exe() {
        let runtime = RealRuntime;
        let exe = runtime.current_exe().unwrap();

        assert!(exe.is_absolute());
        assert!(exe.parent().is_some());
    }
}
