//! "Analyzing ingredients" overlay

use iced::widget::{column, container, text, Space};
use iced::{Alignment, Background, Border, Element, Length, Shadow, Vector};

use super::theme::{self, KitchenTheme};

const PANEL: f32 = 320.0;

/// `sweep` in `0..1` is the scan line position from top to bottom
pub fn view<'a, Message: 'a>(sweep: f32, sparkle: f32) -> Element<'a, Message> {
    // FillPortion needs integers; 1000 steps is smooth enough
    let above = (sweep.clamp(0.0, 1.0) * 1000.0) as u16 + 1;
    let below = 1001 - above.min(1000);

    let line = container(Space::with_height(4))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(KitchenTheme::GOLD)),
            shadow: Shadow {
                color: theme::fade(KitchenTheme::GOLD, 0.8),
                offset: Vector::new(0.0, 0.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        });

    let panel = container(
        column![
            Space::with_height(Length::FillPortion(above)),
            line,
            Space::with_height(Length::FillPortion(below)),
        ]
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .width(PANEL)
    .height(PANEL)
    .clip(true)
    .style(move |_theme| container::Style {
        background: Some(Background::Color(KitchenTheme::PARCHMENT)),
        border: Border {
            color: theme::fade(KitchenTheme::GOLD, 0.5 + 0.5 * sparkle),
            width: 4.0,
            radius: 24.0.into(),
        },
        shadow: Shadow {
            color: theme::fade(KitchenTheme::GOLD, 0.6),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 60.0 + 20.0 * sparkle,
        },
        ..Default::default()
    });

    column![
        panel,
        text("✨ Analyzing Ingredients... ✨").size(24).color(KitchenTheme::GOLD),
        text("Using magical AI vision").size(15).color(KitchenTheme::TAN),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}
