//! Platform dispatch.
//!
//! Resolves the binary built for the host platform inside the launcher's
//! install layout and hands the process over to it.

mod config;

use anyhow::Result;
use log::{debug, info};
use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::LaunchError;
use crate::platform::Platform;
use crate::runtime::Runtime;

pub use config::{BIN_DIR_NAME, LauncherConfig};

/// Compute the path of the binary built for the host platform.
#[tracing::instrument(skip(runtime, config))]
pub fn resolve_binary<R: Runtime>(runtime: &R, config: &LauncherConfig) -> PathBuf {
    let host = runtime.host_info();
    let platform = Platform::from_host(&host);
    debug!(
        "Host reports system {:?}, machine {:?}; using platform {}",
        host.system, host.machine, platform
    );

    config.binary_path(&platform)
}

/// Replace the current process with the binary for the host platform,
/// forwarding `args` (everything after the launcher's own argument 0).
///
/// Never returns on success. Fails with [`LaunchError::BinaryNotFound`] when
/// the expected binary is not on disk; no binary is executed in that case.
#[tracing::instrument(skip(runtime, config, args))]
pub fn launch<R: Runtime>(
    runtime: &R,
    config: &LauncherConfig,
    args: Vec<OsString>,
) -> Result<Infallible> {
    let binary = resolve_binary(runtime, config);

    if !runtime.exists(&binary) {
        return Err(LaunchError::BinaryNotFound(binary).into());
    }

    info!("Launching {} with {} argument(s)", binary.display(), args.len());
    runtime.exec(&binary, &args)
}
