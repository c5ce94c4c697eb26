//! Install banner

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use super::theme::{self, KitchenTheme};

/// `tilt` in `-1..=1` nudges the chef hat back and forth
pub fn view<'a, Message: Clone + 'a>(tilt: f32, on_install: Message, on_dismiss: Message) -> Element<'a, Message> {
    let nudge = 3.0 * tilt;
    let hat = container(text("👨‍🍳").size(30)).padding(Padding {
        top: 4.0,
        bottom: 4.0,
        left: 4.0 + nudge,
        right: 4.0 - nudge,
    });

    let content = column![
        row![
            text("Install Ratatouille AI").size(18).color(KitchenTheme::BURGUNDY),
            Space::with_width(Length::Fill),
            button(text("✕").size(13))
                .on_press(on_dismiss)
                .padding(Padding::from([2.0, 8.0]))
                .style(theme::ghost(KitchenTheme::BROWN)),
        ]
        .align_y(Alignment::Center),
        text("Add it to your applications menu for quick access to your kitchen assistant!")
            .size(13)
            .color(KitchenTheme::BROWN),
        button(
            container(text("⬇ Install App").size(15)).center_x(Length::Fill)
        )
        .width(Length::Fill)
        .padding(Padding::from([8.0, 16.0]))
        .on_press(on_install)
        .style(theme::pill(KitchenTheme::COPPER)),
    ]
    .spacing(8);

    container(row![hat, content].spacing(12).align_y(Alignment::Start))
        .padding(18)
        .width(360)
        .style(theme::card(20.0))
        .into()
}
