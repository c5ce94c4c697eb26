//! Camera portal: the big round "drop your photo here" dome

use std::path::Path;

use iced::widget::{button, column, container, image, text};
use iced::{Background, Border, Color, ContentFit, Element, Length, Shadow, Vector};

use super::theme::{self, KitchenTheme};

const SIZE: f32 = 300.0;

/// `glow` in `0..=1` drives the pulsing rim while a scan runs
pub fn view<'a, Message: Clone + 'a>(
    photo: Option<&Path>,
    scanning: bool,
    glow: f32,
    on_pick: Message,
) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match photo {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => column![
            text("📷").size(64),
            text("Snap your ingredients").size(20).color(KitchenTheme::BURGUNDY),
            text("Click to choose a photo of your fridge or pantry")
                .size(13)
                .color(KitchenTheme::BROWN),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center)
        .into(),
    };

    let rim = if scanning {
        theme::fade(KitchenTheme::GOLD, 0.4 + 0.6 * glow)
    } else {
        theme::fade(KitchenTheme::GOLD, 0.5)
    };
    let shadow_blur = if scanning { 24.0 + 24.0 * glow } else { 24.0 };

    let dome = container(inner)
        .width(SIZE)
        .height(SIZE)
        .center_x(SIZE)
        .center_y(SIZE)
        .clip(true)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 0.851, 0.4, 0.25))),
            border: Border {
                color: rim,
                width: 3.0,
                radius: (SIZE / 2.0).into(),
            },
            shadow: Shadow {
                color: theme::fade(KitchenTheme::BROWN, 0.25),
                offset: Vector::new(0.0, 8.0),
                blur_radius: shadow_blur,
            },
            ..Default::default()
        });

    let label = if scanning {
        "Cooking up results..."
    } else if photo.is_some() {
        "📸 Scan another photo"
    } else {
        "📸 Choose a photo"
    };

    let pick = button(dome)
        .padding(0)
        .on_press_maybe((!scanning).then(|| on_pick.clone()))
        .style(|_theme, _status| button::Style::default());

    column![
        pick,
        button(text(label).size(16))
            .padding([10, 24])
            .on_press_maybe((!scanning).then_some(on_pick))
            .style(theme::pill(KitchenTheme::COPPER)),
    ]
    .spacing(16)
    .align_x(iced::Alignment::Center)
    .into()
}
