use iced::{
    Alignment, Background, Color, Element, Font, Length,
    font::Weight,
    widget::{Column, button, column, container, row, scrollable, text},
    window,
};

use crate::app::{Action, FolderListerApp};
use crate::display::{FolderView, Listing};

const HEADING_FONT_SIZE: f32 = 20.0;
const FILE_NAME_FONT_SIZE: f32 = 14.0;

impl FolderListerApp {
    /// Draws the window `id`: the trigger, the selected folder and the file list
    pub fn view(&self, id: window::Id) -> Element<'_, Action> {
        let Some(folder_view) = self.views.get(&id) else {
            return text("").into();
        };

        // Disabled while a pick or listing is in flight
        let pick_button = button(text("Choose folder").size(HEADING_FONT_SIZE))
            .on_press_maybe(folder_view.can_pick().then_some(Action::PickFolder(id)))
            .style(button::secondary);

        let selected = match &folder_view.selected_folder {
            Some(folder) => text(format!("Selected: {}", folder.display())),
            None => text("No folder selected"),
        }
        .size(HEADING_FONT_SIZE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

        let content = column![
            row![pick_button, selected]
                .spacing(20.0)
                .align_y(Alignment::Center),
            file_list(folder_view),
        ]
        .spacing(20.0)
        .padding(20.0);

        let background = self.config.background;
        let text_color = self.config.text_color;

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(background)),
                text_color: Some(text_color),
                ..container::Style::default()
            })
            .into()
    }
}

fn file_list(view: &FolderView) -> Element<'_, Action> {
    match &view.listing {
        Listing::Empty => text("Choose a folder to list every file inside it")
            .size(FILE_NAME_FONT_SIZE)
            .into(),
        Listing::Loading => text("Loading...").size(FILE_NAME_FONT_SIZE).into(),
        Listing::Failed(e) => text(format!("Error: {}", e))
            .size(FILE_NAME_FONT_SIZE)
            .font(Font::MONOSPACE)
            .color(Color::from_rgb(1.0, 0.85, 0.3))
            .into(),
        Listing::Ready(_) => {
            let lines = view.rendered_lines();
            let count = match lines.len() {
                1 => String::from("1 file"),
                n => format!("{} files", n),
            };

            let rows: Vec<Element<Action>> = lines
                .iter()
                .map(|line| {
                    text(line.as_str())
                        .size(FILE_NAME_FONT_SIZE)
                        .font(Font::MONOSPACE)
                        .into()
                })
                .collect();

            column![
                text(count).size(FILE_NAME_FONT_SIZE),
                scrollable(Column::from_vec(rows).width(Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill),
            ]
            .spacing(10.0)
            .into()
        }
    }
}
