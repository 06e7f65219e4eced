use std::{collections::BTreeSet, fs, path::Path};

use folder_lister::{
    bridge,
    display::{FolderView, Listing},
    error::Error,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_sample_folder_is_listed_and_rendered_relative() {
    let temp = TempDir::new().unwrap();
    let sample = temp.path().join("sample");
    fs::create_dir_all(sample.join("sub")).unwrap();
    fs::write(sample.join("a.txt"), "a").unwrap();
    fs::write(sample.join("sub").join("b.txt"), "b").unwrap();

    let mut view = FolderView::default();
    assert!(view.begin_pick());
    let root = view.folder_picked(Some(sample.clone())).unwrap();
    assert_eq!(view.listing, Listing::Loading);

    let result = bridge::list_files(root.clone()).await;
    let files: BTreeSet<_> = result.clone().unwrap().into_iter().collect();
    assert_eq!(
        files,
        BTreeSet::from([sample.join("a.txt"), sample.join("sub").join("b.txt")])
    );

    view.files_listed(&root, result);

    let rendered: BTreeSet<_> = view.rendered_lines().iter().cloned().collect();
    assert_eq!(
        rendered,
        BTreeSet::from([
            Path::new(".").join("a.txt").display().to_string(),
            Path::new(".").join("sub").join("b.txt").display().to_string(),
        ])
    );
    assert!(view.can_pick());
}

#[tokio::test]
async fn test_vanished_folder_shows_failure() {
    let temp = TempDir::new().unwrap();
    let gone = temp.path().join("gone");

    let mut view = FolderView::default();
    view.begin_pick();
    let root = view.folder_picked(Some(gone.clone())).unwrap();

    let result = bridge::list_files(root.clone()).await;
    view.files_listed(&root, result);

    assert_eq!(view.listing, Listing::Failed(Error::NotFound { path: gone }));
    assert!(view.can_pick());
}
