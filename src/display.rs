use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Error;
use crate::fs_utils::relativize;

/// The state of the file list region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Listing {
    /// No folder has been chosen yet
    #[default]
    Empty,
    Loading,
    Ready(Vec<PathBuf>),
    Failed(Error),
}

/// The display state of one window: the selected folder and its file list.
#[derive(Debug, Default)]
pub struct FolderView {
    /// The folder picked last (if any)
    pub selected_folder: Option<PathBuf>,
    /// The file list derived from `selected_folder`
    pub listing: Listing,
    /// True while the picker is open or a listing is running
    in_flight: bool,
    /// `listing` relativized to `selected_folder`, built once per listing
    lines: Vec<String>,
}

impl FolderView {
    /// Whether the "choose folder" trigger should be enabled
    pub fn can_pick(&self) -> bool {
        !self.in_flight
    }

    /// Starts a pick request. Returns `false` if one is already running.
    pub fn begin_pick(&mut self) -> bool {
        if self.in_flight {
            debug!("Ignoring folder pick while a request is in flight");
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Applies the picker result. Returns the folder that now needs listing.
    ///
    /// A cancelled pick leaves the selection and file list untouched.
    pub fn folder_picked(&mut self, folder: Option<PathBuf>) -> Option<PathBuf> {
        match folder {
            None => {
                self.in_flight = false;
                None
            }
            Some(folder) => {
                self.selected_folder = Some(folder.clone());
                self.listing = Listing::Loading;
                self.lines.clear();
                Some(folder)
            }
        }
    }

    /// Applies a finished listing for `folder`.
    pub fn files_listed(&mut self, folder: &Path, result: Result<Vec<PathBuf>, Error>) {
        if self.selected_folder.as_deref() != Some(folder) {
            warn!("Discarding stale listing for {}", folder.display());
            return;
        }

        self.in_flight = false;
        match result {
            Ok(files) => {
                self.lines = files.iter().map(|f| relativize(folder, f)).collect();
                self.listing = Listing::Ready(files);
            }
            Err(e) => {
                self.lines.clear();
                self.listing = Listing::Failed(e);
            }
        }
    }

    /// The file list as it is shown: one relativized path per line.
    pub fn rendered_lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_then_list() {
        let mut view = FolderView::default();
        let root = PathBuf::from("/tmp/sample");

        assert!(view.begin_pick());
        assert!(!view.can_pick());

        let to_list = view.folder_picked(Some(root.clone()));
        assert_eq!(to_list.as_ref(), Some(&root));
        assert_eq!(view.listing, Listing::Loading);
        assert!(!view.can_pick());

        view.files_listed(
            &root,
            Ok(vec![root.join("a.txt"), root.join("sub").join("b.txt")]),
        );

        assert!(view.can_pick());
        assert_eq!(
            view.rendered_lines(),
            [
                Path::new(".").join("a.txt").display().to_string(),
                Path::new(".").join("sub").join("b.txt").display().to_string(),
            ]
        );
    }

    #[test]
    fn test_cancel_leaves_previous_state() {
        let mut view = FolderView::default();
        let root = PathBuf::from("/data");
        view.begin_pick();
        view.folder_picked(Some(root.clone()));
        view.files_listed(&root, Ok(vec![root.join("x")]));

        assert!(view.begin_pick());
        assert_eq!(view.folder_picked(None), None);

        assert_eq!(view.selected_folder, Some(root.clone()));
        assert_eq!(view.listing, Listing::Ready(vec![root.join("x")]));
        assert!(view.can_pick());
    }

    #[test]
    fn test_lines_follow_the_current_listing() {
        let mut view = FolderView::default();
        let first = PathBuf::from("/first");
        view.begin_pick();
        view.folder_picked(Some(first.clone()));
        view.files_listed(&first, Ok(vec![first.join("old.txt")]));
        assert_eq!(view.rendered_lines().len(), 1);

        let second = PathBuf::from("/second");
        view.begin_pick();
        view.folder_picked(Some(second.clone()));
        assert!(view.rendered_lines().is_empty());

        view.files_listed(&second, Ok(vec![second.join("x"), second.join("y")]));

        let expected: Vec<String> = ["x", "y"]
            .iter()
            .map(|name| Path::new(".").join(name).display().to_string())
            .collect();
        assert_eq!(view.rendered_lines(), expected.as_slice());
    }

    #[test]
    fn test_second_pick_is_rejected_while_in_flight() {
        let mut view = FolderView::default();

        assert!(view.begin_pick());
        assert!(!view.begin_pick());
    }

    #[test]
    fn test_failure_ends_loading() {
        let mut view = FolderView::default();
        let root = PathBuf::from("/vanished");
        view.begin_pick();
        view.folder_picked(Some(root.clone()));

        let error = Error::NotFound { path: root.clone() };
        view.files_listed(&root, Err(error.clone()));

        assert_eq!(view.listing, Listing::Failed(error));
        assert!(view.rendered_lines().is_empty());
        assert!(view.can_pick());
    }

    #[test]
    fn test_stale_listing_is_ignored() {
        let mut view = FolderView::default();
        let root = PathBuf::from("/current");
        view.begin_pick();
        view.folder_picked(Some(root));

        view.files_listed(Path::new("/old"), Ok(vec![PathBuf::from("/old/f")]));

        assert_eq!(view.listing, Listing::Loading);
        assert!(!view.can_pick());
    }
}
