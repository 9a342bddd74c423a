//! Platform detection and binary naming module
//!
//! This module classifies the host (OS and architecture) into the closed set
//! of platforms the launcher ships binaries for, and derives the filename of
//! the platform-specific binary from that classification.

mod binary;
mod detection;

pub use binary::BINARY_PREFIX;
pub use detection::{Arch, HostInfo, Os, Platform};
