use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Collects every non-directory path below `root`, depth first.
///
/// Symlinks are followed. A link pointing back at one of its own ancestors is
/// skipped with a warning instead of being walked forever. Any other unreadable
/// entry fails the whole listing; no partial result is returned.
///
/// # Arguments
///
/// * `root` - The directory to walk. Returned paths are prefixed by it.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| Error::from_io(root, &e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files: Vec<PathBuf> = Vec::new();

    for entry_result in WalkDir::new(root).follow_links(true).min_depth(1) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                if let Some(ancestor) = e.loop_ancestor() {
                    warn!(
                        "list_files: skipping symlink loop at {} (points to {})",
                        e.path().unwrap_or(root).display(),
                        ancestor.display()
                    );
                    continue;
                }
                return Err(walk_error(root, &e));
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        files.push(entry.into_path());
    }

    debug!("list_files: {} files under {}", files.len(), root.display());

    Ok(files)
}

/// Converts a walkdir failure into the crate error, keeping the offending path.
fn walk_error(root: &Path, err: &walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root);
    match err.io_error() {
        Some(io) => Error::from_io(path, io),
        None => Error::Io {
            path: path.to_path_buf(),
            kind: std::io::ErrorKind::Other,
        },
    }
}

/// Returns a display-friendly version of `path` with the `root` prefix
/// replaced by `.`. Paths outside of `root` are returned as-is.
///
/// # Arguments
///
/// * `root` - The selected folder
/// * `path` - A path returned by [`list_files`] for that folder
pub fn relativize(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => Path::new(".").join(relative).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
