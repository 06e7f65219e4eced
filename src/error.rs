use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by the folder bridge and the shell.
///
/// The enum is `Clone` so it can travel inside [`crate::app::Action`] messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("could not read {}: {kind}", path.display())]
    Io { path: PathBuf, kind: io::ErrorKind },

    #[error("listing worker failed: {0}")]
    Worker(String),

    #[error("global shortcut: {0}")]
    Shortcut(String),
}

impl Error {
    /// Classifies an I/O error raised while touching `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            kind => Error::Io { path, kind },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kind() {
        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(
            Error::from_io("/nope", &missing),
            Error::NotFound {
                path: PathBuf::from("/nope")
            }
        );

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            Error::from_io("/root", &denied),
            Error::PermissionDenied { .. }
        ));

        let other = io::Error::from(io::ErrorKind::InvalidData);
        assert!(matches!(
            Error::from_io("/x", &other),
            Error::Io {
                kind: io::ErrorKind::InvalidData,
                ..
            }
        ));
    }
}
