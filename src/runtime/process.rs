//! Process replacement.

use anyhow::Result;
use std::convert::Infallible;
use std::ffi::OsString;
use std::io;
use std::path::Path;

use super::RealRuntime;
use crate::error::LaunchError;

fn exec_error(program: &Path, source: io::Error) -> anyhow::Error {
    LaunchError::Exec {
        path: program.to_path_buf(),
        source,
    }
    .into()
}

impl RealRuntime {
    #[cfg(unix)]
    #[tracing::instrument(skip(self, args))]
    pub(crate) fn exec_impl(&self, program: &Path, args: &[OsString]) -> Result<Infallible> {
        use nix::unistd::execv;
        use std::ffi::{CString, OsStr};
        use std::os::unix::ffi::OsStrExt;

        fn to_cstring(value: &OsStr) -> io::Result<CString> {
            CString::new(value.as_bytes()).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
        }

        let path = to_cstring(program.as_os_str()).map_err(|e| exec_error(program, e))?;

        // argv[0] of the replacement is its own path
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(path.clone());
        for arg in args {
            argv.push(to_cstring(arg).map_err(|e| exec_error(program, e))?);
        }

        let Err(errno) = execv(&path, &argv);
        Err(exec_error(program, io::Error::from(errno)))
    }

    /// Windows cannot replace a process image, so the binary runs as a child
    /// with inherited stdio and its exit code becomes ours.
    #[cfg(not(unix))]
    #[tracing::instrument(skip(self, args))]
    pub(crate) fn exec_impl(&self, program: &Path, args: &[OsString]) -> Result<Infallible> {
        let status = std::process::Command::new(program)
            .args(args)
            .status()
            .map_err(|e| exec_error(program, e))?;

        std::process::exit(status.code().unwrap_or(1));
    }
}
