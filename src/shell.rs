//! Window bookkeeping and the global activation shortcut.

use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{HotKey, HotKeyParseError},
};
use iced::{
    futures::{SinkExt, Stream, channel::mpsc},
    stream, window,
};
use log::{info, warn};

use crate::error::{Error, Result};

/// What the application should do in response to a shell event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Nothing,
    /// Bring the given window to the foreground
    Focus(window::Id),
    /// Open a fresh window
    OpenWindow,
    /// Release global bindings and exit
    Quit,
}

/// Tracks the open windows in the order they were opened.
#[derive(Debug, Default)]
pub struct Shell {
    windows: Vec<window::Id>,
    stay_resident: bool,
}

impl Shell {
    /// Creates an empty shell
    ///
    /// # Arguments
    ///
    /// * `stay_resident` - Keep running once the last window closes
    pub fn new(stay_resident: bool) -> Self {
        Shell {
            windows: Vec::new(),
            stay_resident,
        }
    }

    pub fn windows(&self) -> &[window::Id] {
        &self.windows
    }

    pub fn window_opened(&mut self, id: window::Id) {
        if !self.windows.contains(&id) {
            self.windows.push(id);
        }
    }

    pub fn window_closed(&mut self, id: window::Id) -> ShellCommand {
        self.windows.retain(|w| *w != id);

        if self.windows.is_empty() && !self.stay_resident {
            ShellCommand::Quit
        } else {
            ShellCommand::Nothing
        }
    }

    /// The global shortcut focuses the oldest window. With no window left it
    /// acts as a reactivation.
    pub fn shortcut_pressed(&self) -> ShellCommand {
        match self.windows.first() {
            Some(id) => ShellCommand::Focus(*id),
            None => self.reactivate(),
        }
    }

    pub fn reactivate(&self) -> ShellCommand {
        if self.windows.is_empty() {
            ShellCommand::OpenWindow
        } else {
            ShellCommand::Nothing
        }
    }
}

/// A registered global key combination. Unregistered on drop.
pub struct ShortcutBinding {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl ShortcutBinding {
    /// Registers `accelerator` (e.g. `CmdOrCtrl+Shift+G`) with the OS.
    pub fn register(accelerator: &str) -> Result<Self> {
        let hotkey: HotKey = accelerator
            .parse()
            .map_err(|e: HotKeyParseError| Error::Shortcut(e.to_string()))?;
        let manager = GlobalHotKeyManager::new().map_err(|e| Error::Shortcut(e.to_string()))?;
        manager
            .register(hotkey)
            .map_err(|e| Error::Shortcut(e.to_string()))?;

        info!("Registered global shortcut {}", accelerator);

        Ok(ShortcutBinding { manager, hotkey })
    }

    /// Whether a shortcut event with `id` belongs to this binding
    pub fn matches(&self, id: u32) -> bool {
        self.hotkey.id() == id
    }
}

/// Streams the ids of pressed global shortcuts.
///
/// Events are pushed by the OS hook thread, so the stream stays idle until a
/// key combination is actually pressed.
pub fn shortcut_presses() -> impl Stream<Item = u32> {
    stream::channel(16, |mut output: mpsc::Sender<u32>| async move {
        let (sender, mut presses) = tokio::sync::mpsc::unbounded_channel();

        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if let Some(id) = pressed_id(event.id(), event.state()) {
                let _ = sender.send(id);
            }
        }));

        while let Some(id) = presses.recv().await {
            if output.send(id).await.is_err() {
                break;
            }
        }
    })
}

/// Key releases are ignored
fn pressed_id(id: u32, state: HotKeyState) -> Option<u32> {
    matches!(state, HotKeyState::Pressed).then_some(id)
}

impl std::fmt::Debug for ShortcutBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutBinding")
            .field("hotkey", &self.hotkey)
            .finish_non_exhaustive()
    }
}

impl Drop for ShortcutBinding {
    fn drop(&mut self) {
        match self.manager.unregister(self.hotkey) {
            Ok(()) => info!("Released global shortcut"),
            Err(e) => warn!("Could not release global shortcut: {}", e),
        }
    }
}
