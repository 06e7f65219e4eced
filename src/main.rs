use folder_lister::app::FolderListerApp;

/// The Entrypoint of the application. Opens a single window that lists every
/// file inside a folder chosen by the user.
fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::daemon(
        FolderListerApp::new,
        FolderListerApp::update,
        FolderListerApp::view,
    )
    .title(FolderListerApp::title)
    .theme(FolderListerApp::theme)
    .subscription(FolderListerApp::subscription)
    .run()
}
