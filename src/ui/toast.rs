//! Toast banner

use std::time::Instant;

use iced::widget::{button, column, container, progress_bar, row, text};
use iced::{Alignment, Background, Border, Element, Length, Shadow, Vector};

use super::theme::{self, toast_colors};
use crate::toast::{Toast, ToastKind};

pub fn view<'a, Message: Clone + 'a>(toast: &'a Toast, now: Instant, on_close: Message) -> Element<'a, Message> {
    let colors = toast_colors(toast.kind);
    let icon = match toast.kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "⚠",
        ToastKind::Info => "ℹ",
    };

    let line = row![
        text(icon).size(18).color(colors.accent),
        text(&toast.message).size(15).color(colors.text).width(Length::Fill),
        button(text("✕").size(13))
            .on_press(on_close)
            .padding([2, 8])
            .style(theme::ghost(colors.text)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut body = column![line].spacing(10);
    if toast.has_timer() {
        let accent = colors.accent;
        body = body.push(
            progress_bar(0.0..=1.0, toast.remaining(now))
                .height(4)
                .style(move |_theme| progress_bar::Style {
                    background: Background::Color(theme::fade(accent, 0.25)),
                    bar: Background::Color(accent),
                    border: Border::default().rounded(2.0),
                }),
        );
    }

    let background = colors.background;
    let accent = colors.accent;
    container(body)
        .padding(16)
        .max_width(460)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: accent,
                width: 2.0,
                radius: 16.0.into(),
            },
            shadow: Shadow {
                color: theme::fade(accent, 0.25),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
            ..Default::default()
        })
        .into()
}
