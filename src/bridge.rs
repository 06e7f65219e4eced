//! The folder access bridge.
//!
//! These are the only two operations the display layer may use to reach the
//! host OS. Both are futures so they can be handed to [`iced::Task::perform`]
//! without blocking the UI thread.

use std::{path::PathBuf, time::Instant};

use log::{error, info};

use crate::error::{Error, Result};
use crate::fs_utils;

/// Opens the native folder picker. Resolves to `None` when the user cancels.
pub async fn pick_folder() -> Option<PathBuf> {
    let folder = rfd::AsyncFileDialog::new()
        .set_title("Choose a folder")
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf());

    match &folder {
        Some(path) => info!("Picked folder {}", path.display()),
        None => info!("Folder picker cancelled"),
    }

    folder
}

/// Recursively lists every file below `root` on a blocking worker thread.
///
/// The whole call fails if any part of the walk fails.
pub async fn list_files(root: PathBuf) -> Result<Vec<PathBuf>> {
    info!("Listing files under {}", root.display());
    let started = Instant::now();

    let walk_root = root.clone();
    let result = tokio::task::spawn_blocking(move || fs_utils::list_files(&walk_root))
        .await
        .map_err(|e| Error::Worker(e.to_string()))
        .and_then(|listing| listing);

    match &result {
        Ok(files) => info!(
            "Listed {} files under {} in {:?}",
            files.len(),
            root.display(),
            started.elapsed()
        ),
        Err(e) => error!("Listing {} failed: {}", root.display(), e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_files_runs_off_thread() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("x.rs"), "").unwrap();

        let files = list_files(temp.path().to_path_buf()).await.unwrap();

        assert_eq!(files, vec![temp.path().join("sub").join("x.rs")]);
    }

    #[tokio::test]
    async fn test_list_files_missing_is_error_not_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let result = list_files(missing.clone()).await;

        assert_eq!(result, Err(Error::NotFound { path: missing }));
    }
}
