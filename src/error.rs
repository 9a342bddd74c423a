use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Binary not found for your platform: {}", .0.display())]
    BinaryNotFound(PathBuf),

    #[error("Could not determine the launcher's install location")]
    LauncherLocation(#[source] io::Error),

    #[error("Failed to execute {}", path.display())]
    Exec {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_binary_not_found_message_contains_path() {
        let err = LaunchError::BinaryNotFound(PathBuf::from("/opt/athira/bin/athira-darwin-arm64"));
        assert_eq!(
            err.to_string(),
            "Binary not found for your platform: /opt/athira/bin/athira-darwin-arm64"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_exec_error_keeps_source() {
        let err = LaunchError::Exec {
            path: PathBuf::from("/opt/athira/bin/athira-linux-x86_64"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(
            err.to_string(),
            "Failed to execute /opt/athira/bin/athira-linux-x86_64"
        );
        assert!(err.source().is_some());
    }
}
