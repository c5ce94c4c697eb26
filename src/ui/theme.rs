//! Theme configuration

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::model::MatchTier;
use crate::toast::ToastKind;

/// Warm "rustic bistro" colors
pub struct KitchenTheme;

impl KitchenTheme {
    pub const PAGE: Color = Color::from_rgb(0.98, 0.965, 0.93);
    pub const PARCHMENT: Color = Color::from_rgb(0.957, 0.91, 0.816);
    pub const PARCHMENT_DARK: Color = Color::from_rgb(0.91, 0.863, 0.753);
    pub const BURGUNDY: Color = Color::from_rgb(0.502, 0.0, 0.125);
    pub const BROWN: Color = Color::from_rgb(0.545, 0.353, 0.169);
    pub const COPPER: Color = Color::from_rgb(0.722, 0.451, 0.2);
    pub const GOLD: Color = Color::from_rgb(1.0, 0.851, 0.4);
    pub const TAN: Color = Color::from_rgb(0.831, 0.647, 0.455);
    pub const INK: Color = Color::from_rgb(0.176, 0.141, 0.086);
    pub const GREEN: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const AMBER: Color = Color::from_rgb(0.961, 0.62, 0.043);
    pub const ORANGE: Color = Color::from_rgb(0.976, 0.451, 0.086);
    pub const RED: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const BLUE: Color = Color::from_rgb(0.231, 0.51, 0.965);
    pub const WHITE: Color = Color::WHITE;
    /// Dimmed backdrop behind modals and the scanning overlay
    pub const BACKDROP: Color = Color::from_rgba(0.176, 0.141, 0.086, 0.75);
}

pub fn match_color(tier: MatchTier) -> Color {
    match tier {
        MatchTier::High => KitchenTheme::GREEN,
        MatchTier::Medium => KitchenTheme::AMBER,
        MatchTier::Low => KitchenTheme::ORANGE,
    }
}

pub struct ToastColors {
    pub background: Color,
    pub accent: Color,
    pub text: Color,
}

pub fn toast_colors(kind: ToastKind) -> ToastColors {
    match kind {
        ToastKind::Success => ToastColors {
            background: Color::from_rgb(0.941, 0.992, 0.957),
            accent: KitchenTheme::GREEN,
            text: Color::from_rgb(0.086, 0.396, 0.204),
        },
        ToastKind::Error => ToastColors {
            background: Color::from_rgb(0.996, 0.949, 0.949),
            accent: KitchenTheme::RED,
            text: Color::from_rgb(0.6, 0.106, 0.106),
        },
        ToastKind::Info => ToastColors {
            background: Color::from_rgb(0.937, 0.965, 1.0),
            accent: KitchenTheme::BLUE,
            text: Color::from_rgb(0.118, 0.251, 0.686),
        },
    }
}

/// Same color with a different alpha
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Rounded parchment panel used by cards and modals
pub fn card(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(KitchenTheme::PARCHMENT)),
        border: Border {
            color: KitchenTheme::COPPER,
            width: 2.0,
            radius: radius.into(),
        },
        shadow: Shadow {
            color: fade(Color::BLACK, 0.2),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 18.0,
        },
        ..Default::default()
    }
}

/// Solid pill button in the given color
pub fn pill(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: 0.9,
                ..color
            },
            button::Status::Disabled => fade(color, 0.4),
            _ => color,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: KitchenTheme::WHITE,
            border: Border::default().rounded(24.0),
            shadow: Shadow {
                color: fade(color, 0.35),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

/// Borderless button that only tints on hover
pub fn ghost(text: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(fade(text, 0.12))),
            _ => None,
        },
        text_color: text,
        border: Border::default().rounded(24.0),
        shadow: Shadow::default(),
    }
}
