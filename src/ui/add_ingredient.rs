//! Add-ingredient dialog

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::{self, KitchenTheme};

/// Focus target for the ingredient name field
pub fn input_id() -> text_input::Id {
    text_input::Id::new("add-ingredient")
}

/// Dialog body; the caller wraps it in [`super::modal`]
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
    on_cancel: Message,
) -> Element<'a, Message> {
    let can_submit = !value.trim().is_empty();

    let input = text_input("e.g. Tomato, Cheese, Basil...", value)
        .id(input_id())
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .padding(Padding::new(12.0))
        .size(16)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(KitchenTheme::WHITE),
            border: Border {
                color: KitchenTheme::TAN,
                width: 2.0,
                radius: 12.0.into(),
            },
            icon: KitchenTheme::BROWN,
            placeholder: KitchenTheme::TAN,
            value: KitchenTheme::INK,
            selection: theme::fade(KitchenTheme::GOLD, 0.6),
        });

    let actions = row![
        button(text("Cancel").size(15))
            .on_press(on_cancel)
            .padding(Padding::from([10.0, 18.0]))
            .style(theme::ghost(KitchenTheme::BROWN)),
        Space::with_width(Length::Fill),
        button(text("+ Add to list").size(15))
            .on_press_maybe(can_submit.then_some(on_submit))
            .padding(Padding::from([10.0, 18.0]))
            .style(theme::pill(KitchenTheme::GREEN)),
    ];

    container(
        column![
            text("🥗 Add Ingredient").size(22).color(KitchenTheme::BURGUNDY),
            text("Forgot something in the fridge?").size(14).color(KitchenTheme::BROWN),
            Space::with_height(8),
            input,
            Space::with_height(8),
            actions,
        ]
        .spacing(8),
    )
    .padding(24)
    .width(380)
    .style(theme::card(24.0))
    .into()
}
