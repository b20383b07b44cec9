// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a modal image carousel built with the Iced GUI framework.
//!
//! The [`carousel`] module holds the framework-free core: image dimensions,
//! the strip offset positioner, swipe gesture tracking and indicator
//! selection. The [`ui`] and [`app`] modules put it on screen.

pub mod app;
pub mod carousel;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
