// SPDX-License-Identifier: MPL-2.0
//! Media access for the carousel: dimension probing and display handles.

pub mod dimensions;

pub use dimensions::{probe_dimensions, resolve_dimensions};

use crate::carousel::DerivedImage;
use iced::widget::image::Handle;

/// Builds display handles for every image, in carousel order.
///
/// Handles decode lazily inside the renderer, so this only records paths.
pub fn load_handles(images: &[DerivedImage]) -> Vec<Handle> {
    images
        .iter()
        .map(|image| Handle::from_path(&image.image.src))
        .collect()
}
