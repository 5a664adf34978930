mod style;

use iced::{
    widget::{
        button, column, container, mouse_area, radio, row, scrollable, text, text_input, Column,
        Space,
    },
    Alignment, Element, Length,
};

use crate::domain::{MediaKind, Session};

/// Input state owned by the form; results live in the session.
pub struct DownloadView {
    pub url: String,
    pub kind: MediaKind,
    pub is_downloading: bool,
}

impl Default for DownloadView {
    fn default() -> Self {
        Self {
            url: String::new(),
            kind: MediaKind::Video,
            is_downloading: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    UrlChanged(String),
    KindSelected(MediaKind),
    DownloadPressed,
    /// Double click on a history row
    HistoryActivated(usize),
}

impl DownloadView {
    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::UrlChanged(url) => {
                self.url = url;
            }
            DownloadMessage::KindSelected(kind) => {
                self.kind = kind;
            }
            DownloadMessage::DownloadPressed | DownloadMessage::HistoryActivated(_) => {
                // Will be handled by the app
            }
        }
    }

    pub fn view<'a>(&'a self, session: &'a Session) -> Element<'a, DownloadMessage> {
        let kind_selector = row![
            radio(
                "Download Video",
                MediaKind::Video,
                Some(self.kind),
                DownloadMessage::KindSelected
            ),
            radio(
                "Download Audio",
                MediaKind::Audio,
                Some(self.kind),
                DownloadMessage::KindSelected
            ),
        ]
        .spacing(40);

        let label = if self.is_downloading {
            "Downloading..."
        } else {
            "Download"
        };
        let download_button = button(text(label).size(16))
            .on_press_maybe((!self.is_downloading).then_some(DownloadMessage::DownloadPressed))
            .padding([8, 20])
            .style(style::download_button);

        let log = Column::with_children(session.status.log().iter().map(|line| {
            text(line.text.as_str())
                .size(13)
                .color(style::tag_color(line.tag))
                .into()
        }))
        .spacing(2);

        let history: Element<'a, DownloadMessage> = if session.history.is_empty() {
            text("No downloads yet").size(13).into()
        } else {
            Column::with_children(session.history.list().iter().enumerate().map(
                |(index, path)| {
                    mouse_area(text(path.display().to_string()).size(13).width(Length::Fill))
                        .on_double_click(DownloadMessage::HistoryActivated(index))
                        .into()
                },
            ))
            .spacing(4)
            .into()
        };

        let status = match session.status.message() {
            Some(line) => text(line.text.as_str())
                .size(14)
                .color(style::tag_color(line.tag)),
            None => text(""),
        };

        let content = column![
            text("Enter the URL of the YouTube video")
                .size(20)
                .color(style::LABEL),
            text_input("Paste a video URL...", &self.url)
                .on_input(DownloadMessage::UrlChanged)
                .on_submit(DownloadMessage::DownloadPressed)
                .padding(10),
            kind_selector,
            download_button,
            Space::new().height(Length::Fixed(10.0)),
            container(
                scrollable(log)
                    .anchor_bottom()
                    .width(Length::Fill)
                    .height(Length::Fixed(180.0))
            )
            .padding(10)
            .style(style::panel),
            text("Download history:").size(16).color(style::LABEL),
            container(
                scrollable(history)
                    .width(Length::Fill)
                    .height(Length::Fixed(110.0))
            )
            .padding(10)
            .style(style::panel),
            text("Status:").size(16).color(style::LABEL),
            container(status)
                .padding(10)
                .width(Length::Fill)
                .style(style::panel),
        ]
        .padding(30)
        .spacing(12)
        .max_width(680)
        .align_x(Alignment::Center);

        container(content)
            .center_x(Length::Fill)
            .height(Length::Fill)
            .style(style::backdrop)
            .into()
    }
}
