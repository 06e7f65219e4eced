use iced::{Color, Size};

/// Fixed settings for the application shell. Nothing here is read from disk
/// or the environment.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// The title of every window
    pub title: String,
    /// The size new windows open with
    pub window_size: Size,
    /// The window background (deep red)
    pub background: Color,
    /// The text color drawn on top of `background`
    pub text_color: Color,
    /// The accelerator that brings the app to the foreground
    pub shortcut: String,
    /// Keep running once the last window is closed. The shortcut reopens a window.
    pub stay_resident_without_windows: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            title: String::from("Folder Lister"),
            window_size: Size::new(800.0, 600.0),
            background: Color::from_rgb8(0xb7, 0x1c, 0x1c),
            text_color: Color::WHITE,
            shortcut: String::from("CmdOrCtrl+Shift+G"),
            stay_resident_without_windows: cfg!(target_os = "macos"),
        }
    }
}
