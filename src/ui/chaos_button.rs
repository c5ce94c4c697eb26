//! Floating "Chaos Mode" button

use iced::widget::{button, column, text};
use iced::{Alignment, Element, Padding};

use super::theme::{self, KitchenTheme};

/// `wobble` in `-1..=1` shifts the label side to side
pub fn view<'a, Message: Clone + 'a>(wobble: f32, busy: bool, on_press: Message) -> Element<'a, Message> {
    let shift = 4.0 * wobble;
    let label = column![
        text(if busy { "🎲 Rolling..." } else { "🎲 Chaos Mode" }).size(17),
        text("Surprise me!").size(11),
    ]
    .align_x(Alignment::Center);

    button(label)
        .padding(Padding {
            top: 12.0,
            bottom: 12.0,
            left: 20.0 + shift,
            right: 20.0 - shift,
        })
        .on_press_maybe((!busy).then_some(on_press))
        .style(theme::pill(KitchenTheme::BURGUNDY))
        .into()
}
