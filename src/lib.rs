// The application struct and its update loop
pub mod app;
// The two operations the UI may use to reach the OS
pub mod bridge;
// Fixed shell settings
pub mod config;
// The per-window display state
pub mod display;
pub mod error;
// The filesystem utilities
pub mod fs_utils;
// Window bookkeeping and the global shortcut
pub mod shell;
// The UI rendering code which gets attached to the FolderListerApp
mod ui;
