// SPDX-License-Identifier: MPL-2.0
//! Framework-independent carousel core.
//!
//! - [`layout`]: centring offset of the selected image
//! - [`gesture`]: swipe detection
//! - [`navigator`]: the per-modal [`Carousel`] tying both together
//! - [`viewport`]: centred vs. paged strip placement

pub mod gesture;
pub mod image;
pub mod layout;
pub mod navigator;
pub mod viewport;

pub use gesture::{GestureReset, GestureTracker, Swipe};
pub use image::{derive_images, DerivedImage, Dimensions, Image, ImageId, ImageSource};
pub use layout::{compute_layout, image_left_edges, CarouselState, LayoutMetrics};
pub use navigator::{Carousel, CarouselSettings};
pub use viewport::{Breakpoints, StripTransform, ViewportClass};
