// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the image modal, kicks off dimension resolution at startup
//! and shows a small backdrop screen from which the gallery can be reopened
//! after it was closed.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::media;
use crate::ui::image_modal::{self, Event as ModalEvent};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, text, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};

pub const APP_NAME: &str = "Iced Carousel";

/// Initial window size; wide enough for the desktop layout.
const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 240.0;

pub struct App {
    modal: image_modal::State,
    config_warning: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("modal", &self.modal)
            .field("config_warning", &self.config_warning)
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 takes an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state and starts resolving image dimensions.
    ///
    /// The gallery opens immediately; it shows a loading placeholder until
    /// every image size is known.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = flags.config.carousel_settings();

        if let Some(warning) = &flags.config_warning {
            tracing::warn!(%warning, "using default settings");
        }

        if flags.sources.is_empty() {
            let mut modal = image_modal::State::empty(settings);
            modal.update(image_modal::Message::Open);
            let app = App {
                modal,
                config_warning: flags.config_warning,
            };
            return (app, Task::none());
        }

        let mut modal = image_modal::State::loading(settings);
        modal.update(image_modal::Message::Open);

        tracing::info!(count = flags.sources.len(), "resolving image dimensions");
        let task = Task::perform(media::resolve_dimensions(flags.sources), |result| {
            Message::Modal(image_modal::Message::DimensionsResolved(result))
        });

        let app = App {
            modal,
            config_warning: flags.config_warning,
        };
        (app, task)
    }

    fn title(&self) -> String {
        let Some(carousel) = self.modal.carousel().filter(|c| c.is_open()) else {
            return APP_NAME.to_string();
        };

        format!(
            "{} ({}/{}) - {}",
            carousel.state().selected_id(),
            carousel.state().selected_index() + 1,
            carousel.len(),
            APP_NAME
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Modal(modal_message) => match self.modal.update(modal_message) {
                ModalEvent::Closed => tracing::debug!("gallery closed"),
                ModalEvent::Opened => tracing::debug!("gallery opened"),
                ModalEvent::None => {}
            },
            Message::OpenGallery => {
                self.modal.update(image_modal::Message::Open);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let mut backdrop = column![
            text(APP_NAME).size(28),
            button(text("Open gallery")).on_press(Message::OpenGallery),
        ]
        .spacing(16)
        .align_x(Horizontal::Center);

        if let Some(warning) = &self.config_warning {
            backdrop = backdrop.push(text(warning.as_str()).size(14));
        }

        let backdrop = container(backdrop)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        if !self.modal.is_open() {
            return backdrop.into();
        }

        Stack::new()
            .push(backdrop)
            .push(self.modal.view().map(Message::Modal))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::image::test_image;
    use crate::carousel::ImageSource;

    fn ready_app() -> App {
        let flags = Flags {
            sources: vec![ImageSource::new("a.png", "a.png")],
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);
        let _ = app.update(Message::Modal(image_modal::Message::DimensionsResolved(Ok(
            vec![test_image("a.png", 300, 640), test_image("b.png", 900, 640)],
        ))));
        app
    }

    #[test]
    fn new_without_sources_opens_empty_gallery() {
        let (app, _task) = App::new(Flags::default());
        assert!(app.modal.is_open());
        assert!(!app.modal.is_loading());
        assert!(app.modal.carousel().is_none());
    }

    #[test]
    fn new_with_sources_starts_loading() {
        let flags = Flags {
            sources: vec![ImageSource::new("a.png", "a.png")],
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        assert!(app.modal.is_loading());
        assert_eq!(app.title(), APP_NAME);
    }

    #[test]
    fn title_shows_selected_image_and_position() {
        let mut app = ready_app();
        assert_eq!(app.title(), "a.png (1/2) - Iced Carousel");
        let _ = app.update(Message::Modal(image_modal::Message::Next));
        assert_eq!(app.title(), "b.png (2/2) - Iced Carousel");
    }

    #[test]
    fn open_gallery_after_close_starts_from_first_image() {
        let mut app = ready_app();
        let _ = app.update(Message::Modal(image_modal::Message::Next));
        let _ = app.update(Message::Modal(image_modal::Message::Close));
        assert_eq!(app.title(), APP_NAME);

        let _ = app.update(Message::OpenGallery);
        assert_eq!(app.title(), "a.png (1/2) - Iced Carousel");
    }

    #[test]
    fn config_warning_is_kept_for_display() {
        let flags = Flags {
            config_warning: Some("bad settings".into()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        assert_eq!(app.config_warning.as_deref(), Some("bad settings"));
    }
}
