// SPDX-License-Identifier: MPL-2.0
//! Modal image carousel component.
//!
//! The modal owns one [`Carousel`] per image list. While image dimensions
//! are being resolved it shows a loading placeholder; the carousel is only
//! built once every size is known and never with an empty list.

mod strip;

use crate::carousel::{Carousel, CarouselSettings, Image, ImageId, ViewportClass};
use crate::error::Error;
use crate::media;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, canvas, container, text, Row, Stack};
use iced::{event, keyboard, window, Color, Element, Length, Padding, Theme};
use strip::CarouselStrip;

/// Messages handled by the modal.
#[derive(Debug, Clone)]
pub enum Message {
    DimensionsResolved(Result<Vec<Image>, Error>),
    IndicatorClicked(ImageId),
    GestureStarted(f32),
    GestureEnded(f32),
    Next,
    Previous,
    Open,
    Close,
    /// Keyboard and window events routed from the application subscription.
    RawEvent(event::Event),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Opened,
    Closed,
}

enum Phase {
    /// Dimensions are still being resolved.
    Loading,
    Ready {
        carousel: Carousel,
        handles: Vec<Handle>,
    },
    Failed(String),
    /// Nothing to show.
    Empty,
}

pub struct State {
    phase: Phase,
    settings: CarouselSettings,
    /// Open state requested before the carousel existed.
    open_requested: bool,
    viewport_class: ViewportClass,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phase = match &self.phase {
            Phase::Loading => "loading",
            Phase::Ready { .. } => "ready",
            Phase::Failed(_) => "failed",
            Phase::Empty => "empty",
        };
        f.debug_struct("ImageModal")
            .field("phase", &phase)
            .field("is_open", &self.is_open())
            .field("viewport_class", &self.viewport_class)
            .finish()
    }
}

impl State {
    /// Modal waiting for [`Message::DimensionsResolved`].
    pub fn loading(settings: CarouselSettings) -> Self {
        Self::with_phase(Phase::Loading, settings)
    }

    /// Modal for an image list that turned out to be empty.
    pub fn empty(settings: CarouselSettings) -> Self {
        Self::with_phase(Phase::Empty, settings)
    }

    fn with_phase(phase: Phase, settings: CarouselSettings) -> Self {
        Self {
            phase,
            settings,
            open_requested: false,
            viewport_class: ViewportClass::Desktop,
        }
    }

    pub fn is_open(&self) -> bool {
        match &self.phase {
            Phase::Ready { carousel, .. } => carousel.is_open(),
            _ => self.open_requested,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        match &self.phase {
            Phase::Ready { carousel, .. } => Some(carousel),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport_class
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DimensionsResolved(result) => {
                self.on_dimensions_resolved(result);
                Event::None
            }
            Message::IndicatorClicked(id) => {
                if let Phase::Ready { carousel, .. } = &mut self.phase {
                    if let Err(err) = carousel.select_by_id(&id) {
                        tracing::warn!(%err, "ignoring indicator click");
                    }
                }
                Event::None
            }
            Message::GestureStarted(x) => {
                if let Phase::Ready { carousel, .. } = &mut self.phase {
                    carousel.on_gesture_start(x);
                }
                Event::None
            }
            Message::GestureEnded(x) => {
                if let Phase::Ready { carousel, .. } = &mut self.phase {
                    carousel.on_gesture_end(x);
                }
                Event::None
            }
            Message::Next => {
                if let Phase::Ready { carousel, .. } = &mut self.phase {
                    carousel.select_next();
                }
                Event::None
            }
            Message::Previous => {
                if let Phase::Ready { carousel, .. } = &mut self.phase {
                    carousel.select_previous();
                }
                Event::None
            }
            Message::Open => self.open(),
            Message::Close => self.close(),
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    fn open(&mut self) -> Event {
        if self.is_open() {
            return Event::None;
        }
        self.open_requested = true;
        if let Phase::Ready { carousel, .. } = &mut self.phase {
            carousel.open();
        }
        Event::Opened
    }

    fn close(&mut self) -> Event {
        if !self.is_open() {
            return Event::None;
        }
        self.open_requested = false;
        if let Phase::Ready { carousel, .. } = &mut self.phase {
            carousel.close();
        }
        Event::Closed
    }

    fn on_dimensions_resolved(&mut self, result: Result<Vec<Image>, Error>) {
        self.phase = match result.and_then(|images| Carousel::new(images, self.settings)) {
            Ok(mut carousel) => {
                if self.open_requested {
                    carousel.open();
                }
                let handles = media::load_handles(carousel.images());
                tracing::info!(images = carousel.len(), "carousel ready");
                Phase::Ready { carousel, handles }
            }
            Err(Error::EmptyImageList) => Phase::Empty,
            Err(err) => {
                tracing::warn!(%err, "carousel unavailable");
                Phase::Failed(err.to_string())
            }
        };
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Event {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                let class = ViewportClass::from_width(size.width, self.settings.breakpoints);
                if class != self.viewport_class {
                    tracing::debug!(?class, width = size.width, "viewport class changed");
                    self.viewport_class = class;
                }
                Event::None
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => self.handle_key(named),
            _ => Event::None,
        }
    }

    fn handle_key(&mut self, named: keyboard::key::Named) -> Event {
        if !self.is_open() {
            return Event::None;
        }
        match named {
            keyboard::key::Named::Escape => self.close(),
            keyboard::key::Named::ArrowRight => self.update(Message::Next),
            keyboard::key::Named::ArrowLeft => self.update(Message::Previous),
            _ => Event::None,
        }
    }

    /// Renders the modal. Returns an empty element while closed.
    pub fn view(&self) -> Element<'_, Message> {
        if !self.is_open() {
            return container(text("")).into();
        }

        let body: Element<'_, Message> = match &self.phase {
            Phase::Loading => centered_text("Loading images…"),
            Phase::Empty => centered_text("No images to display"),
            Phase::Failed(message) => centered_text(format!("Unable to show images: {}", message)),
            Phase::Ready { carousel, handles } => canvas(CarouselStrip { carousel, handles })
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        };

        let chrome = ChromeInsets::for_class(self.viewport_class);

        let mut layers = Stack::new()
            .push(
                container(body)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(dim_style),
            )
            .push(
                container(
                    button(text("✕").size(24))
                        .on_press(Message::Close)
                        .style(button::text),
                )
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(Padding::ZERO.top(chrome.close_top).right(chrome.close_right)),
            );

        if let Some(carousel) = self.carousel().filter(|c| c.shows_indicators()) {
            layers = layers.push(
                container(indicators(carousel))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Bottom)
                    .padding(Padding::ZERO.bottom(chrome.indicator_bottom)),
            );
        }

        layers.width(Length::Fill).height(Length::Fill).into()
    }
}

/// Distances of the close button and the indicator row from the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChromeInsets {
    close_top: f32,
    close_right: f32,
    indicator_bottom: f32,
}

impl ChromeInsets {
    fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Desktop => Self {
                close_top: 64.0,
                close_right: 64.0,
                indicator_bottom: 172.0,
            },
            ViewportClass::Tablet => Self {
                close_top: 54.0,
                close_right: 22.0,
                indicator_bottom: 53.0,
            },
            ViewportClass::Mobile => Self {
                close_top: 35.0,
                close_right: 16.0,
                indicator_bottom: 52.0,
            },
        }
    }
}

fn indicators(carousel: &Carousel) -> Element<'_, Message> {
    let selected = carousel.state().selected_id();

    carousel
        .images()
        .iter()
        .fold(Row::new().spacing(8), |row, image| {
            let style: fn(&Theme, button::Status) -> button::Style = if image.id() == selected {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                button(text("").size(1))
                    .width(Length::Fixed(8.0))
                    .height(Length::Fixed(8.0))
                    .padding(0)
                    .style(style)
                    .on_press(Message::IndicatorClicked(image.id().clone())),
            )
        })
        .into()
}

fn centered_text<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(label).size(18).color(Color::WHITE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn dim_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.7).into()),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::image::test_image;

    fn images() -> Vec<Image> {
        vec![
            test_image("a", 300, 640),
            test_image("b", 600, 640),
            test_image("c", 450, 640),
        ]
    }

    fn ready_modal() -> State {
        let mut modal = State::loading(CarouselSettings::default());
        modal.update(Message::DimensionsResolved(Ok(images())));
        modal
    }

    fn selected(modal: &State) -> &str {
        modal
            .carousel()
            .expect("carousel ready")
            .state()
            .selected_id()
            .as_str()
    }

    #[test]
    fn open_before_resolution_applies_when_ready() {
        let mut modal = State::loading(CarouselSettings::default());
        assert_eq!(modal.update(Message::Open), Event::Opened);
        assert!(modal.is_loading());
        assert!(modal.is_open());

        modal.update(Message::DimensionsResolved(Ok(images())));
        assert!(modal.carousel().expect("ready").is_open());
    }

    #[test]
    fn empty_resolution_shows_nothing() {
        let mut modal = State::loading(CarouselSettings::default());
        modal.update(Message::DimensionsResolved(Ok(Vec::new())));
        assert!(modal.carousel().is_none());
        assert!(modal.error().is_none());
        assert!(!modal.is_loading());
    }

    #[test]
    fn failed_resolution_keeps_error_message() {
        let mut modal = State::loading(CarouselSettings::default());
        modal.update(Message::DimensionsResolved(Err(Error::Io("gone".into()))));
        assert_eq!(modal.error(), Some("I/O Error: gone"));
    }

    #[test]
    fn indicator_click_selects_image() {
        let mut modal = ready_modal();
        modal.update(Message::Open);
        modal.update(Message::IndicatorClicked(ImageId::from("c")));
        assert_eq!(selected(&modal), "c");
    }

    #[test]
    fn unknown_indicator_is_ignored() {
        let mut modal = ready_modal();
        modal.update(Message::IndicatorClicked(ImageId::from("b")));
        modal.update(Message::IndicatorClicked(ImageId::from("zzz")));
        assert_eq!(selected(&modal), "b");
    }

    #[test]
    fn swipe_messages_navigate_with_wraparound() {
        let mut modal = ready_modal();
        modal.update(Message::Open);
        modal.update(Message::GestureStarted(100.0));
        modal.update(Message::GestureEnded(300.0));
        assert_eq!(selected(&modal), "c");
    }

    #[test]
    fn close_then_open_starts_from_first_image() {
        let mut modal = ready_modal();
        modal.update(Message::Open);
        modal.update(Message::Next);
        assert_eq!(modal.update(Message::Close), Event::Closed);
        assert!(!modal.is_open());
        assert_eq!(modal.update(Message::Open), Event::Opened);
        assert_eq!(selected(&modal), "a");
    }

    #[test]
    fn closing_a_closed_modal_is_silent() {
        let mut modal = ready_modal();
        assert_eq!(modal.update(Message::Close), Event::None);
    }

    #[test]
    fn keyboard_navigates_and_closes_when_open() {
        let mut modal = ready_modal();
        modal.update(Message::Open);
        modal.handle_key(keyboard::key::Named::ArrowRight);
        assert_eq!(selected(&modal), "b");
        modal.handle_key(keyboard::key::Named::ArrowLeft);
        modal.handle_key(keyboard::key::Named::ArrowLeft);
        assert_eq!(selected(&modal), "c");
        assert_eq!(modal.handle_key(keyboard::key::Named::Escape), Event::Closed);
    }

    #[test]
    fn keyboard_is_ignored_while_closed() {
        let mut modal = ready_modal();
        modal.handle_key(keyboard::key::Named::ArrowRight);
        assert_eq!(selected(&modal), "a");
    }

    #[test]
    fn resize_updates_viewport_class() {
        let mut modal = ready_modal();
        modal.update(Message::RawEvent(event::Event::Window(window::Event::Resized(
            iced::Size::new(500.0, 800.0),
        ))));
        assert_eq!(modal.viewport_class(), ViewportClass::Mobile);
    }

    #[test]
    fn chrome_moves_closer_to_edges_on_small_viewports() {
        let desktop = ChromeInsets::for_class(ViewportClass::Desktop);
        let mobile = ChromeInsets::for_class(ViewportClass::Mobile);
        assert!(mobile.indicator_bottom < desktop.indicator_bottom);
        assert!(mobile.close_right < desktop.close_right);
    }
}
