// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the image strip and turning pointer input into
//! gesture messages.
//!
//! Touch input follows the first finger only. A left mouse press/release
//! pair is treated like a one-finger swipe so the carousel can be dragged on
//! desktop too.

use super::Message;
use crate::carousel::{Carousel, DerivedImage, StripTransform};
use iced::widget::canvas::{self, Action};
use iced::widget::image::Handle;
use iced::{mouse, touch, Point, Rectangle, Renderer, Size, Theme};

/// Pointer bookkeeping local to the canvas widget.
#[derive(Debug, Default)]
pub struct PointerState {
    finger: Option<touch::Finger>,
    /// Press position of the left button, relative to the canvas.
    mouse_press_x: Option<f32>,
}

pub struct CarouselStrip<'a> {
    pub carousel: &'a Carousel,
    pub handles: &'a [Handle],
}

impl canvas::Program<Message> for CarouselStrip<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.finger.is_some() || !bounds.contains(*position) {
                    return None;
                }
                state.finger = Some(*id);
                Some(Action::publish(Message::GestureStarted(position.x)).and_capture())
            }
            iced::Event::Touch(touch::Event::FingerLifted { id, position }) => {
                if state.finger != Some(*id) {
                    return None;
                }
                state.finger = None;
                Some(Action::publish(Message::GestureEnded(position.x)).and_capture())
            }
            iced::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                // Abandoned gesture: the carousel keeps whatever start it recorded.
                if state.finger == Some(*id) {
                    state.finger = None;
                }
                None
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.mouse_press_x = Some(position.x);
                Some(Action::publish(Message::GestureStarted(position.x)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let press_x = state.mouse_press_x.take()?;
                let end_x = release_x(press_x, cursor, bounds);
                Some(Action::publish(Message::GestureEnded(end_x)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();

        let placements = match self.carousel.strip_transform(size.width) {
            StripTransform::Centered { translate_x } => centered_placements(
                self.carousel,
                translate_x,
                size,
            ),
            StripTransform::Paged { translate_x } => self
                .carousel
                .images()
                .iter()
                .enumerate()
                .map(|(index, image)| {
                    paged_rect(image, translate_x + index as f32 * size.width, size)
                })
                .collect(),
        };

        for (rect, handle) in placements.into_iter().zip(self.handles) {
            if is_visible(&rect, size.width) {
                frame.draw_image(rect, canvas::Image::new(handle.clone()));
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Rectangles of the centred strip: display height, vertically centred.
fn centered_placements(carousel: &Carousel, translate_x: f32, size: Size) -> Vec<Rectangle> {
    let height = carousel.settings().metrics.display_height;
    let top = (size.height - height) / 2.0;

    carousel
        .images()
        .iter()
        .zip(carousel.left_edges())
        .map(|(image, left)| {
            Rectangle::new(
                Point::new(translate_x + left, top),
                Size::new(image.resized_width, height),
            )
        })
        .collect()
}

/// Rectangle of one image on its page starting at `page_x`.
///
/// Narrow images fill the page height, wide ones fill the page width; both
/// stay centred on the page.
fn paged_rect(image: &DerivedImage, page_x: f32, page: Size) -> Rectangle {
    let aspect = image.image.dimensions.aspect_ratio();
    let (width, height) = if image.is_fixed_height() {
        (page.height * aspect, page.height)
    } else {
        (page.width, page.width / aspect)
    };

    Rectangle::new(
        Point::new(
            page_x + (page.width - width) / 2.0,
            (page.height - height) / 2.0,
        ),
        Size::new(width, height),
    )
}

/// End position of a mouse drag, relative to the canvas.
///
/// A release outside the window has no cursor position; it ends the gesture
/// where it started, which reads as a tap and clears the recorded start.
fn release_x(press_x: f32, cursor: mouse::Cursor, bounds: Rectangle) -> f32 {
    cursor
        .position()
        .map_or(press_x, |position| position.x - bounds.x)
}

fn is_visible(rect: &Rectangle, viewport_width: f32) -> bool {
    rect.x + rect.width > 0.0 && rect.x < viewport_width
}
