//! Runtime abstraction for system operations.
//!
//! Every side effect the launcher performs goes through the [`Runtime`]
//! trait, so the dispatch logic can be exercised against `MockRuntime`.
//!
//! # Structure
//!
//! - `env` - Host identity and the launcher's own location
//! - `fs` - File system queries (existence, canonicalization)
//! - `process` - Process replacement

mod env;
mod fs;
mod process;

use anyhow::Result;
use std::convert::Infallible;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::platform::HostInfo;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    /// Operating system name and machine architecture reported by the host.
    fn host_info(&self) -> HostInfo;
    fn current_exe(&self) -> io::Result<PathBuf>;

    // File System
    fn exists(&self, path: &Path) -> bool;
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    // Process
    /// Replace the current process with `program`, passing `args` after
    /// argument 0. Only returns if the replacement could not happen.
    fn exec(&self, program: &Path, args: &[OsString]) -> Result<Infallible>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn host_info(&self) -> HostInfo {
        self.host_info_impl()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        self.current_exe_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    fn exec(&self, program: &Path, args: &[OsString]) -> Result<Infallible> {
        self.exec_impl(program, args)
    }
}
