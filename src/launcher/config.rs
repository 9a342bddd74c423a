use anyhow::Result;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LaunchError;
use crate::platform::{BINARY_PREFIX, Platform};
use crate::runtime::Runtime;

/// Name of the directory beside the launcher that holds platform binaries
pub const BIN_DIR_NAME: &str = "bin";

/// On-disk layout the launcher dispatches into:
/// `{install_dir}/{bin_dir_name}/{binary_prefix}-{os}-{arch}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub install_dir: PathBuf,
    pub bin_dir_name: String,
    pub binary_prefix: String,
}

impl LauncherConfig {
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            bin_dir_name: BIN_DIR_NAME.to_string(),
            binary_prefix: BINARY_PREFIX.to_string(),
        }
    }

    /// Layout rooted at the directory containing the running launcher.
    ///
    /// Symlinks to the launcher are resolved, so a launcher linked into a
    /// `PATH` directory still finds the `bin` directory of its real install.
    #[tracing::instrument(skip(runtime))]
    pub fn from_runtime<R: Runtime>(runtime: &R) -> Result<Self> {
        let exe = runtime.current_exe().map_err(LaunchError::LauncherLocation)?;

        let exe = match runtime.canonicalize(&exe) {
            Ok(resolved) => resolved,
            Err(err) => {
                debug!("Using unresolved launcher path {}: {:#}", exe.display(), err);
                exe
            }
        };

        let install_dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            LaunchError::LauncherLocation(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ))
        })?;

        debug!("Launcher install directory: {}", install_dir.display());
        Ok(Self::new(install_dir))
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.install_dir.join(&self.bin_dir_name)
    }

    pub fn binary_path(&self, platform: &Platform) -> PathBuf {
        self.bin_dir().join(platform.binary_name(&self.binary_prefix))
    }
}
