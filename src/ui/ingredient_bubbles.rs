//! Detected ingredient bubbles

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use super::theme::{self, KitchenTheme};
use crate::model::Ingredient;

const PER_ROW: usize = 4;

pub fn view<'a, Message: Clone + 'a>(
    ingredients: &'a [Ingredient],
    on_add: Message,
    on_remove: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let header = row![
        text("🧺 Detected Ingredients").size(22).color(KitchenTheme::BURGUNDY),
        Space::with_width(Length::Fill),
        text(format!("{} found", ingredients.len()))
            .size(14)
            .color(KitchenTheme::BROWN),
    ]
    .align_y(Alignment::Center);

    let rows = ingredients.chunks(PER_ROW).map(|chunk| {
        Element::from(row(chunk.iter().map(|ingredient| bubble(ingredient, &on_remove))).spacing(12))
    });

    let add = button(text("+ Add ingredient").size(14))
        .on_press(on_add)
        .padding(Padding::from([8.0, 16.0]))
        .style(theme::pill(KitchenTheme::GREEN));

    container(
        column![header, Column::with_children(rows).spacing(12), add]
            .spacing(16)
            .align_x(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card(24.0))
    .into()
}

fn bubble<'a, Message: Clone + 'a>(
    ingredient: &'a Ingredient,
    on_remove: &impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let dot = if ingredient.is_confident() {
        KitchenTheme::GREEN
    } else {
        KitchenTheme::AMBER
    };

    let content = row![
        text(ingredient.icon().glyph()).size(18),
        text(&ingredient.name).size(15).color(KitchenTheme::INK),
        container(text(format!("{}%", ingredient.confidence_percent())).size(11))
            .padding(Padding::from([2.0, 6.0]))
            .style(move |_theme| container::Style {
                background: Some(Background::Color(dot)),
                text_color: Some(KitchenTheme::WHITE),
                border: Border::default().rounded(8.0),
                ..Default::default()
            }),
        button(text("✕").size(12))
            .on_press(on_remove(ingredient.name.clone()))
            .padding(Padding::from([2.0, 6.0]))
            .style(theme::ghost(KitchenTheme::BROWN)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(content)
        .padding(Padding::from([8.0, 12.0]))
        .style(|_theme| container::Style {
            background: Some(Background::Color(KitchenTheme::WHITE)),
            border: Border {
                color: KitchenTheme::TAN,
                width: 1.5,
                radius: 20.0.into(),
            },
            ..Default::default()
        })
        .into()
}
