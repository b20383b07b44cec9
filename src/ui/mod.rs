// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`image_modal`] - Modal carousel with swipe, keyboard and indicator
//!   navigation

pub mod image_modal;
