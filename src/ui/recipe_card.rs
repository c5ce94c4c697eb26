//! Recipe card in the horizontal gallery

use iced::widget::{button, column, container, image, row, stack, text, Space};
use iced::alignment::Horizontal;
use iced::{Alignment, Background, Border, ContentFit, Element, Length, Padding, Shadow, Vector};

use super::theme::{self, KitchenTheme};
use crate::model::Recipe;

const WIDTH: f32 = 280.0;
const ART_HEIGHT: f32 = 170.0;

/// `lift` in `0..=1` gently raises the match badge
pub fn view<'a, Message: Clone + 'a>(
    recipe: &'a Recipe,
    artwork: Option<&image::Handle>,
    lift: f32,
    on_open: Message,
) -> Element<'a, Message> {
    let art: Element<'a, Message> = match artwork {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(ART_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("🍲").size(72))
            .width(Length::Fill)
            .height(ART_HEIGHT)
            .center_x(Length::Fill)
            .center_y(ART_HEIGHT)
            .style(|_theme| container::Style {
                background: Some(Background::Color(KitchenTheme::PARCHMENT_DARK)),
                ..Default::default()
            })
            .into(),
    };

    let badge_color = theme::match_color(recipe.match_tier());
    let badge = container(text(format!("🎯 {}", recipe.match_label())).size(13))
        .padding(Padding::from([4.0, 10.0]))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(badge_color)),
            text_color: Some(KitchenTheme::WHITE),
            border: Border::default().rounded(12.0),
            shadow: Shadow {
                color: theme::fade(badge_color, 0.4),
                offset: Vector::new(0.0, 2.0 + 2.0 * lift),
                blur_radius: 8.0,
            },
        });

    let header = stack![
        art,
        container(badge)
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(Padding {
                top: 12.0 - 4.0 * lift,
                right: 12.0,
                bottom: 0.0,
                left: 0.0,
            }),
    ];

    let meta = row![
        text(format!("⏱ {}", recipe.cook_time)).size(13),
        text("·").size(13),
        text(format!("👥 {}", recipe.servings)).size(13),
        text("·").size(13),
        text(format!("👨‍🍳 {}", recipe.difficulty)).size(13),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body = column![
        text(&recipe.name).size(18).color(KitchenTheme::BURGUNDY),
        container(meta).style(|_theme| container::Style {
            text_color: Some(KitchenTheme::BROWN),
            ..Default::default()
        }),
        text(format!(
            "You have {} of {} ingredients",
            recipe.owned_count(),
            recipe.ingredients.len()
        ))
        .size(12)
        .color(KitchenTheme::COPPER),
        Space::with_height(4),
        text("View recipe →").size(14).color(KitchenTheme::BURGUNDY),
    ]
    .spacing(8)
    .padding(16);

    let card = container(column![header, body])
        .width(WIDTH)
        .clip(true)
        .style(|_theme| container::Style {
            background: Some(Background::Color(KitchenTheme::WHITE)),
            border: Border {
                color: KitchenTheme::TAN,
                width: 2.0,
                radius: 20.0.into(),
            },
            shadow: Shadow {
                color: theme::fade(KitchenTheme::BROWN, 0.2),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        });

    button(card)
        .padding(0)
        .on_press(on_open)
        .style(|_theme, _status| button::Style::default())
        .into()
}
