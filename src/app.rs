//! Core application state and Iced Application implementation
//!
//! The window is one page: header, camera portal, detected ingredients and
//! the recipe gallery, with floating chaos button, install banner and toast.
//! All state transitions go through [`Session`]; this module only turns the
//! queries it emits into async tasks and draws the result.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

use iced::keyboard::{self, Key};
use iced::widget::{column, container, image, row, scrollable, stack, text, text_input, Space};
use iced::alignment::{Horizontal, Vertical};
use iced::{event, window};
use iced::{Alignment, Background, Element, Event, Length, Padding, Subscription, Task, Theme};

use crate::animation;
use crate::backend::types::BackendRecipe;
use crate::backend::{BackendClient, ImageUpload};
use crate::config::Config;
use crate::install::{InstallPaths, InstallPrompt};
use crate::model::{Ingredient, FALLBACK_IMAGE};
use crate::session::{RecipeQuery, Session};
use crate::toast::ToastKind;
use crate::ui::{self, theme::{self, KitchenTheme}};

// ============================================================================
// Application State
// ============================================================================

pub struct Ratatouille {
    session: Session,
    backend: BackendClient,
    install: InstallPrompt,
    artwork: Option<image::Handle>,
    started: Instant,
    now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    PickPhoto,
    PhotoPicked(Option<PathBuf>),
    Detected(Result<Vec<Ingredient>, String>),
    RecipesLoaded(RecipeQuery, Result<Vec<BackendRecipe>, String>),
    OpenAddIngredient,
    AddIngredientChanged(String),
    AddIngredientSubmit,
    CloseAddIngredient,
    RemoveIngredient(String),
    Chaos,
    SelectRecipe(String),
    CloseRecipe,
    ToggleStep(u32),
    CloseToast,
    InstallApp,
    DismissInstall,
    ArtworkLoaded(Result<Vec<u8>, String>),
    Tick(Instant),
    EscapePressed,
}

impl Ratatouille {
    pub fn new(config: Config, backend: BackendClient) -> (Self, Task<Message>) {
        let paths = match InstallPaths::discover() {
            Ok(paths) => Some(paths),
            Err(e) => {
                tracing::warn!("Install prompt disabled: {}", e);
                None
            }
        };
        let now = Instant::now();

        let app = Self {
            session: Session::new(config.toast_duration),
            install: InstallPrompt::load(paths, SystemTime::now()),
            backend: backend.clone(),
            artwork: None,
            started: now,
            now,
        };

        let artwork = Task::perform(
            async move {
                backend
                    .fetch_image(FALLBACK_IMAGE)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::ArtworkLoaded,
        );

        (app, artwork)
    }

    pub fn title(&self) -> String {
        String::from("Ratatouille AI")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickPhoto => {
                if self.session.is_scanning() {
                    return Task::none();
                }
                Task::perform(pick_photo(), Message::PhotoPicked)
            }

            Message::PhotoPicked(None) => Task::none(),

            Message::PhotoPicked(Some(path)) => {
                if !self.session.begin_scan(path.clone()) {
                    return Task::none();
                }
                tracing::info!("Scanning {:?}", path);
                let backend = self.backend.clone();
                Task::perform(
                    async move {
                        let upload = ImageUpload::from_path(&path).await?;
                        backend.detect_ingredients(upload).await
                    },
                    |result| Message::Detected(result.map_err(|e| e.user_message())),
                )
            }

            Message::Detected(result) => {
                let query = self.session.detection_finished(result, Instant::now());
                self.run_query(query)
            }

            Message::RecipesLoaded(query, result) => {
                self.session
                    .recipes_loaded(&query, result, &mut rand::thread_rng(), Instant::now());
                Task::none()
            }

            Message::OpenAddIngredient => {
                self.session.open_add_form();
                text_input::focus(ui::add_ingredient::input_id())
            }

            Message::AddIngredientChanged(value) => {
                self.session.edit_add_form(value);
                Task::none()
            }

            Message::AddIngredientSubmit => {
                let query = self.session.submit_add_form(Instant::now());
                self.run_query(query)
            }

            Message::CloseAddIngredient => {
                self.session.close_add_form();
                Task::none()
            }

            Message::RemoveIngredient(name) => {
                let query = self.session.remove_ingredient(&name);
                self.run_query(query)
            }

            Message::Chaos => {
                let query = self.session.begin_chaos();
                self.run_query(query)
            }

            Message::SelectRecipe(id) => {
                self.session.select_recipe(&id);
                Task::none()
            }

            Message::CloseRecipe => {
                self.session.close_recipe();
                Task::none()
            }

            Message::ToggleStep(number) => {
                self.session.toggle_step(number);
                Task::none()
            }

            Message::CloseToast => {
                self.session.close_toast();
                Task::none()
            }

            Message::InstallApp => {
                match self.install.install() {
                    Ok(_) => self.session.notify(
                        "Ratatouille AI is now in your applications menu!",
                        ToastKind::Success,
                        Instant::now(),
                    ),
                    Err(e) => tracing::warn!("Install failed: {}", e),
                }
                Task::none()
            }

            Message::DismissInstall => {
                self.install.dismiss(SystemTime::now());
                Task::none()
            }

            Message::ArtworkLoaded(Ok(bytes)) => {
                tracing::debug!("Recipe artwork loaded ({} bytes)", bytes.len());
                self.artwork = Some(image::Handle::from_bytes(bytes));
                Task::none()
            }

            Message::ArtworkLoaded(Err(e)) => {
                tracing::warn!("Recipe artwork unavailable, drawing placeholder: {}", e);
                Task::none()
            }

            Message::Tick(now) => {
                self.now = now;
                self.session.tick(now);
                Task::none()
            }

            Message::EscapePressed => {
                if self.session.add_form().is_some() {
                    return self.update(Message::CloseAddIngredient);
                }
                if self.session.selected().is_some() {
                    return self.update(Message::CloseRecipe);
                }
                Task::none()
            }
        }
    }

    /// Hand a session query to the backend
    fn run_query(&self, query: Option<RecipeQuery>) -> Task<Message> {
        let Some(query) = query else {
            return Task::none();
        };
        let backend = self.backend.clone();
        Task::perform(
            async move {
                let result = backend
                    .fetch_recipes(&query.ingredients)
                    .await
                    .map_err(|e| e.user_message());
                (query, result)
            },
            |(query, result)| Message::RecipesLoaded(query, result),
        )
    }

    fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let elapsed = self.elapsed();

        let mut page = column![self.view_header(elapsed)]
            .spacing(36)
            .padding(Padding::from([32.0, 24.0]))
            .align_x(Alignment::Center)
            .max_width(1100);

        page = page.push(ui::camera_portal::view(
            self.session.photo().map(PathBuf::as_path),
            self.session.is_scanning(),
            animation::pulse(elapsed, Duration::from_millis(1500)),
            Message::PickPhoto,
        ));

        if !self.session.ingredients().is_empty() {
            page = page.push(ui::ingredient_bubbles::view(
                self.session.ingredients(),
                Message::OpenAddIngredient,
                Message::RemoveIngredient,
            ));
        }

        if !self.session.recipes().is_empty() {
            page = page.push(self.view_recipes(elapsed));
        }

        if !self.session.has_results() && !self.session.is_scanning() {
            page = page.push(view_empty_state(elapsed));
        }

        page = page.push(Space::with_height(80));

        let base = container(
            scrollable(container(page).center_x(Length::Fill)).height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(KitchenTheme::PAGE)),
            ..Default::default()
        });

        let mut layers = stack![base, self.view_footer()];

        layers = layers.push(
            container(ui::chaos_button::view(
                animation::swing(elapsed, Duration::from_secs(3)),
                self.session.is_scanning(),
                Message::Chaos,
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(Padding {
                top: 0.0,
                right: 28.0,
                bottom: 64.0,
                left: 0.0,
            }),
        );

        if self.install.is_visible() {
            layers = layers.push(
                container(ui::install_prompt::view(
                    animation::swing(elapsed, Duration::from_secs(3)),
                    Message::InstallApp,
                    Message::DismissInstall,
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Bottom)
                .padding(Padding {
                    top: 0.0,
                    right: 0.0,
                    bottom: 64.0,
                    left: 28.0,
                }),
            );
        }

        let mut content: Element<'_, Message> = layers.into();

        if let Some(recipe) = self.session.selected() {
            content = ui::modal(
                content,
                ui::recipe_modal::view(
                    recipe,
                    |number| self.session.is_step_checked(number),
                    Message::ToggleStep,
                    Message::CloseRecipe,
                ),
                Some(Message::CloseRecipe),
            );
        }

        if let Some(value) = self.session.add_form() {
            content = ui::modal(
                content,
                ui::add_ingredient::view(
                    value,
                    Message::AddIngredientChanged,
                    Message::AddIngredientSubmit,
                    Message::CloseAddIngredient,
                ),
                Some(Message::CloseAddIngredient),
            );
        }

        if self.session.is_scanning() {
            content = ui::modal(
                content,
                ui::scanning::view(
                    animation::cycle(elapsed, Duration::from_secs(2)),
                    animation::pulse(elapsed, Duration::from_millis(1200)),
                ),
                None,
            );
        }

        if let Some(toast) = self.session.toast() {
            content = stack![
                content,
                container(ui::toast::view(toast, self.now, Message::CloseToast))
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .padding(16),
            ]
            .into();
        }

        content
    }

    fn view_header(&self, elapsed: Duration) -> Element<'_, Message> {
        let tagline_alpha = animation::breathe(elapsed, Duration::from_secs(3), 0.6, 1.0);
        column![
            text("🐀👨‍🍳").size(56),
            text("Ratatouille AI").size(44).color(KitchenTheme::BURGUNDY),
            text("The Fridge-Scavenger Chef").size(18).color(KitchenTheme::BROWN),
            text("\"Anyone can cook with what they have!\"")
                .size(14)
                .color(theme::fade(KitchenTheme::COPPER, tagline_alpha)),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into()
    }

    fn view_recipes(&self, elapsed: Duration) -> Element<'_, Message> {
        let lift = animation::pulse(elapsed, Duration::from_secs(2));
        let cards = row(self.session.recipes().iter().map(|recipe| {
            ui::recipe_card::view(
                recipe,
                self.artwork.as_ref(),
                lift,
                Message::SelectRecipe(recipe.id.clone()),
            )
        }))
        .spacing(24)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 16.0,
            left: 0.0,
        });

        let gallery = scrollable(cards).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ));

        let mut section = column![
            text("Matched Recipes").size(28).color(KitchenTheme::BURGUNDY),
            gallery,
        ]
        .spacing(20)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        if self.session.recipes().len() > 1 {
            let drift = 10.0 * animation::pulse(elapsed, Duration::from_secs(2));
            section = section.push(
                container(text("← Scroll to explore more recipes →").size(13).color(KitchenTheme::COPPER))
                    .padding(Padding {
                        top: 0.0,
                        right: 0.0,
                        bottom: 0.0,
                        left: drift,
                    }),
            );
        }

        section.into()
    }

    fn view_footer(&self) -> Element<'_, Message> {
        container(
            container(text("Made with ❤️ in the kitchen • Bon appétit!").size(13).color(KitchenTheme::BROWN))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(14)
                .style(|_theme| container::Style {
                    background: Some(Background::Color(theme::fade(KitchenTheme::PAGE, 0.95))),
                    ..Default::default()
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::event::listen_with(escape_pressed),
            animation::frames().map(Message::Tick),
        ])
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn view_empty_state<'a>(elapsed: Duration) -> Element<'a, Message> {
    let wobble = animation::swing(elapsed, Duration::from_secs(3));
    let nudge = 6.0 * wobble;
    column![
        container(text("🔍").size(56)).padding(Padding {
            top: 0.0,
            bottom: 0.0,
            left: 6.0 + nudge,
            right: 6.0 - nudge,
        }),
        text("Ready to Cook?").size(24).color(KitchenTheme::BURGUNDY),
        text("Snap a photo of your fridge or pantry,")
            .size(15)
            .color(KitchenTheme::BROWN),
        text("and let Chef Remy work his magic!")
            .size(15)
            .color(KitchenTheme::BROWN),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

/// Escape closes dialogs even when the focused text input already handled it
fn escape_pressed(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

/// Native "open image" dialog
async fn pick_photo() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a photo of your ingredients")
        .add_filter("Images", &["jpg", "jpeg", "png", "webp", "bmp", "gif"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{Code, Named, Physical};
    use iced::keyboard::{Location, Modifiers};

    fn key_press(key: Key, code: Code) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: Physical::Code(code),
            location: Location::Standard,
            modifiers: Modifiers::empty(),
            text: None,
        })
    }

    #[test]
    fn test_escape_handled_even_when_captured() {
        let escape = key_press(Key::Named(Named::Escape), Code::Escape);

        for status in [event::Status::Ignored, event::Status::Captured] {
            let message = escape_pressed(escape.clone(), status, window::Id::unique());
            assert!(matches!(message, Some(Message::EscapePressed)));
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let enter = key_press(Key::Named(Named::Enter), Code::Enter);
        assert!(escape_pressed(enter, event::Status::Captured, window::Id::unique()).is_none());
    }
}
