//! Full recipe view shown in a modal

use iced::widget::{button, checkbox, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use super::theme::{self, KitchenTheme};
use crate::model::{Recipe, RecipeIngredient, RecipeStep};

pub fn view<'a, Message: Clone + 'a>(
    recipe: &'a Recipe,
    is_checked: impl Fn(u32) -> bool,
    on_toggle: impl Fn(u32) -> Message + Clone + 'a,
    on_close: Message,
) -> Element<'a, Message> {
    let close = button(text("✕").size(18))
        .on_press(on_close)
        .padding(Padding::from([6.0, 12.0]))
        .style(theme::pill(KitchenTheme::BURGUNDY));

    let summary = container(
        text(format!(
            "{} • {} • {} servings",
            recipe.match_label(),
            recipe.cook_time,
            recipe.servings
        ))
        .size(14)
        .color(KitchenTheme::INK),
    )
    .padding(Padding::from([6.0, 16.0]))
    .style(|_theme| container::Style {
        background: Some(Background::Color(KitchenTheme::GOLD)),
        border: Border::default().rounded(16.0),
        ..Default::default()
    });

    let title = column![
        row![Space::with_width(Length::Fill), close],
        text(&recipe.name).size(30).color(KitchenTheme::BURGUNDY),
        summary,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let ingredients = section(
        "🥕 Ingredients",
        if recipe.ingredients.is_empty() {
            column![placeholder("The chef left the shopping list blank.")]
        } else {
            Column::with_children(recipe.ingredients.iter().map(ingredient_line))
        },
    );

    let steps = section(
        "👨‍🍳 Instructions",
        if recipe.steps.is_empty() {
            column![placeholder("No steps for this one. Improvise!")]
        } else {
            Column::with_children(recipe.steps.iter().map(|step| {
                step_line(step, is_checked(step.number), on_toggle.clone())
            }))
        },
    );

    let body = column![
        title,
        row![ingredients, steps].spacing(24),
        container(text("✨ Bon appétit! ✨").size(18).color(KitchenTheme::BURGUNDY))
            .center_x(Length::Fill),
    ]
    .spacing(24)
    .padding(32);

    container(scrollable(body))
        .width(760)
        .max_height(640)
        .style(theme::card(28.0))
        .into()
}

fn section<'a, Message: 'a>(
    title: &'a str,
    items: Column<'a, Message>,
) -> Element<'a, Message> {
    container(
        column![
            text(title).size(20).color(KitchenTheme::BURGUNDY),
            items.spacing(10),
        ]
        .spacing(14),
    )
    .padding(20)
    .width(Length::FillPortion(1))
    .style(|_theme| container::Style {
        background: Some(Background::Color(KitchenTheme::WHITE)),
        border: Border {
            color: KitchenTheme::TAN,
            width: 1.5,
            radius: 18.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn placeholder<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    text(message).size(14).color(KitchenTheme::TAN).into()
}

fn ingredient_line<'a, Message: 'a>(ingredient: &'a RecipeIngredient) -> Element<'a, Message> {
    let (mark, color) = if ingredient.owned {
        ("✓", KitchenTheme::GREEN)
    } else {
        ("✕", KitchenTheme::RED)
    };

    let mut details = column![text(&ingredient.name).size(15).color(KitchenTheme::BROWN)];
    if !ingredient.amount.is_empty() {
        details = details.push(text(&ingredient.amount).size(13).color(KitchenTheme::INK));
    }

    row![
        container(text(mark).size(14))
            .width(26)
            .height(26)
            .center_x(26)
            .center_y(26)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(color)),
                text_color: Some(KitchenTheme::WHITE),
                border: Border::default().rounded(13.0),
                ..Default::default()
            }),
        details,
        Space::with_width(Length::Fill),
        text(if ingredient.owned { "in your kitchen" } else { "to buy" })
            .size(12)
            .color(theme::fade(color, 0.8)),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

fn step_line<'a, Message: Clone + 'a>(
    step: &'a RecipeStep,
    checked: bool,
    on_toggle: impl Fn(u32) -> Message + 'a,
) -> Element<'a, Message> {
    let number = step.number;
    let instruction_color = if checked {
        theme::fade(KitchenTheme::BROWN, 0.5)
    } else {
        KitchenTheme::INK
    };

    row![
        checkbox(format!("{number}."), checked)
            .on_toggle(move |_| on_toggle(number))
            .size(20),
        text(&step.instruction)
            .size(15)
            .color(instruction_color)
            .width(Length::Fill),
    ]
    .spacing(12)
    .align_y(Alignment::Start)
    .into()
}
