use anyhow::Result;
use athira_launcher::launcher::{LauncherConfig, launch};
use athira_launcher::runtime::RealRuntime;
use log::debug;
use std::env;
use std::ffi::OsString;

/// athira - platform launcher
///
/// Runs `bin/athira-<os>-<arch>` from the launcher's install directory,
/// forwarding every argument untouched. The launcher has no options of its own.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    debug!("athira launcher {}", env!("ATHIRA_LAUNCHER_VERSION"));

    let runtime = RealRuntime;
    let config = LauncherConfig::from_runtime(&runtime)?;
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match launch(&runtime, &config, args)? {}
}
