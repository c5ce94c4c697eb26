//! View pieces of the kitchen window

pub mod add_ingredient;
pub mod camera_portal;
pub mod chaos_button;
pub mod ingredient_bubbles;
pub mod install_prompt;
pub mod recipe_card;
pub mod recipe_modal;
pub mod scanning;
pub mod theme;
pub mod toast;

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Background, Element};

use theme::KitchenTheme;

/// Lay `content` over `base` on a dimmed backdrop; clicking the backdrop
/// sends `on_blur`
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = center(opaque(content)).style(|_theme| container::Style {
        background: Some(Background::Color(KitchenTheme::BACKDROP)),
        ..container::Style::default()
    });

    let layer: Element<'a, Message> = match on_blur {
        Some(message) => mouse_area(backdrop).on_press(message).into(),
        None => backdrop.into(),
    };

    stack![base.into(), opaque(layer)].into()
}
