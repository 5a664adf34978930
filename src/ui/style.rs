use iced::widget::{button, container};
use iced::{gradient, Background, Border, Color, Radians, Theme};

use crate::domain::StatusTag;

const BLUE: Color = Color::from_rgb(33.0 / 255.0, 150.0 / 255.0, 243.0 / 255.0);
const CHARCOAL: Color = Color::from_rgb(33.0 / 255.0, 33.0 / 255.0, 33.0 / 255.0);
const PANEL: Color = Color::from_rgb(28.0 / 255.0, 28.0 / 255.0, 28.0 / 255.0);
const ORANGE: Color = Color::from_rgb(245.0 / 255.0, 124.0 / 255.0, 0.0);
const ORANGE_HOVER: Color = Color::from_rgb(1.0, 152.0 / 255.0, 0.0);

pub const LABEL: Color = Color::WHITE;

pub fn tag_color(tag: StatusTag) -> Color {
    match tag {
        StatusTag::Info => Color::from_rgb(0.0, 191.0 / 255.0, 1.0),
        StatusTag::Success => Color::from_rgb(76.0 / 255.0, 175.0 / 255.0, 80.0 / 255.0),
        StatusTag::Error => Color::from_rgb(1.0, 99.0 / 255.0, 71.0 / 255.0),
    }
}

/// Blue-to-charcoal window background.
pub fn backdrop(_theme: &Theme) -> container::Style {
    let linear = gradient::Linear::new(Radians::PI)
        .add_stop(0.0, BLUE)
        .add_stop(1.0, CHARCOAL);

    container::Style {
        background: Some(Background::Gradient(linear.into())),
        ..container::Style::default()
    }
}

pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PANEL)),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        text_color: Some(LABEL),
        ..container::Style::default()
    }
}

pub fn download_button(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::primary(theme, status);
    style.background = Some(Background::Color(match status {
        button::Status::Hovered => ORANGE_HOVER,
        button::Status::Disabled => ORANGE.scale_alpha(0.5),
        _ => ORANGE,
    }));
    style.text_color = Color::WHITE;
    style
}
