use std::{collections::HashMap, path::PathBuf};

use iced::{Subscription, Task, Theme, window};
use log::{debug, info, warn};

use crate::bridge;
use crate::config::ShellConfig;
use crate::display::FolderView;
use crate::error::Error;
use crate::shell::{self, Shell, ShellCommand, ShortcutBinding};

/// The application state
#[derive(Debug)]
pub struct FolderListerApp {
    /// Fixed shell settings
    pub config: ShellConfig,
    /// The open windows, oldest first
    pub shell: Shell,
    /// The display state of every open window
    pub views: HashMap<window::Id, FolderView>,
    /// Whether the system is in dark mode
    pub system_color_mode: dark_light::Mode,
    /// The global activation shortcut. `None` if registration failed or after shutdown.
    shortcut: Option<ShortcutBinding>,
}

/// The messages that drive [`FolderListerApp::update`]
#[derive(Debug, Clone)]
pub enum Action {
    // The "choose folder" button was pressed in a window
    PickFolder(window::Id),
    // The folder picker closed, with the chosen folder if any
    FolderPicked(window::Id, Option<PathBuf>),
    // The recursive listing of a folder finished
    FilesListed(window::Id, PathBuf, Result<Vec<PathBuf>, Error>),
    // A window finished opening
    WindowOpened(window::Id),
    // A window was closed by the user
    WindowClosed(window::Id),
    // A global shortcut with the given id was pressed
    ShortcutPressed(u32),
}

impl FolderListerApp {
    /// Builds the application and opens the first window
    pub fn new() -> (Self, Task<Action>) {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> (Self, Task<Action>) {
        let system_color_mode = match dark_light::detect() {
            Ok(mode) => mode,
            Err(_) => dark_light::Mode::Light,
        };
        info!("Detected system color mode: {:?}", system_color_mode);

        let shortcut = match ShortcutBinding::register(&config.shortcut) {
            Ok(binding) => Some(binding),
            Err(e) => {
                warn!("Running without a global shortcut: {}", e);
                None
            }
        };

        let mut app = FolderListerApp {
            shell: Shell::new(config.stay_resident_without_windows),
            config,
            views: HashMap::new(),
            system_color_mode,
            shortcut,
        };
        let task = app.open_window();

        (app, task)
    }

    pub fn update(&mut self, action: Action) -> Task<Action> {
        match action {
            Action::PickFolder(id) => {
                if let Some(view) = self.views.get_mut(&id)
                    && view.begin_pick()
                {
                    Task::perform(bridge::pick_folder(), move |folder| {
                        Action::FolderPicked(id, folder)
                    })
                } else {
                    Task::none()
                }
            }
            Action::FolderPicked(id, folder) => {
                let Some(view) = self.views.get_mut(&id) else {
                    return Task::none();
                };

                match view.folder_picked(folder) {
                    Some(root) => {
                        let listed = root.clone();
                        Task::perform(bridge::list_files(root), move |result| {
                            Action::FilesListed(id, listed, result)
                        })
                    }
                    None => Task::none(),
                }
            }
            Action::FilesListed(id, root, result) => {
                match self.views.get_mut(&id) {
                    Some(view) => view.files_listed(&root, result),
                    None => debug!("Window {:?} closed before its listing finished", id),
                }
                Task::none()
            }
            Action::WindowOpened(id) => {
                info!("Opened window {:?}", id);
                Task::none()
            }
            Action::WindowClosed(id) => {
                info!("Closed window {:?}", id);
                self.views.remove(&id);
                let command = self.shell.window_closed(id);
                self.run(command)
            }
            Action::ShortcutPressed(id) => {
                if !self.shortcut.as_ref().is_some_and(|s| s.matches(id)) {
                    return Task::none();
                }

                let command = self.shell.shortcut_pressed();
                self.run(command)
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Action> {
        let closed = window::close_events().map(Action::WindowClosed);

        if self.shortcut.is_none() {
            return closed;
        }

        Subscription::batch([
            closed,
            Subscription::run(shell::shortcut_presses).map(Action::ShortcutPressed),
        ])
    }

    pub fn title(&self, id: window::Id) -> String {
        match self
            .views
            .get(&id)
            .and_then(|view| view.selected_folder.as_ref())
        {
            Some(folder) => format!("{} - {}", self.config.title, folder.display()),
            None => self.config.title.clone(),
        }
    }

    pub fn theme(&self, _id: window::Id) -> Theme {
        match self.system_color_mode {
            dark_light::Mode::Dark => Theme::Dark,
            dark_light::Mode::Light | dark_light::Mode::Unspecified => Theme::Light,
        }
    }

    /// Opens a new window with a fresh display state
    fn open_window(&mut self) -> Task<Action> {
        let (id, opened) = window::open(window::Settings {
            size: self.config.window_size,
            ..window::Settings::default()
        });

        self.shell.window_opened(id);
        self.views.insert(id, FolderView::default());

        opened.map(Action::WindowOpened)
    }

    fn run(&mut self, command: ShellCommand) -> Task<Action> {
        match command {
            ShellCommand::Nothing => Task::none(),
            ShellCommand::Focus(id) => {
                debug!("Bringing window {:?} to the foreground", id);
                Task::batch([window::minimize(id, false), window::gain_focus(id)])
            }
            ShellCommand::OpenWindow => self.open_window(),
            ShellCommand::Quit => {
                // Dropping the binding unregisters it before the event loop stops
                self.shortcut.take();
                info!("Last window closed, exiting");
                iced::exit()
            }
        }
    }
}
