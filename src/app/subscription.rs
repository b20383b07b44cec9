// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and window-resize events are routed to the image modal. Pointer
//! input is handled by the modal's canvas directly.

use super::Message;
use crate::ui::image_modal;
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(event, status))
}

fn route_event(event: event::Event, status: event::Status) -> Option<Message> {
    let routed = match &event {
        event::Event::Window(iced::window::Event::Resized(_)) => true,
        event::Event::Keyboard(..) => status == event::Status::Ignored,
        _ => false,
    };

    routed.then(|| Message::Modal(image_modal::Message::RawEvent(event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard;

    fn modifiers_changed() -> event::Event {
        event::Event::Keyboard(keyboard::Event::ModifiersChanged(
            keyboard::Modifiers::SHIFT,
        ))
    }

    #[test]
    fn ignored_keyboard_events_reach_the_modal() {
        assert!(matches!(
            route_event(modifiers_changed(), event::Status::Ignored),
            Some(Message::Modal(image_modal::Message::RawEvent(_)))
        ));
    }

    #[test]
    fn captured_keyboard_events_are_dropped() {
        assert!(route_event(modifiers_changed(), event::Status::Captured).is_none());
    }

    #[test]
    fn resize_is_routed_even_when_captured() {
        let resized = event::Event::Window(iced::window::Event::Resized(iced::Size::new(
            640.0, 480.0,
        )));
        assert!(route_event(resized, event::Status::Captured).is_some());
    }

    #[test]
    fn mouse_events_are_left_to_widgets() {
        let moved = event::Event::Mouse(iced::mouse::Event::CursorLeft);
        assert!(route_event(moved, event::Status::Ignored).is_none());
    }
}
