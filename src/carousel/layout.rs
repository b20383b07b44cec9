// SPDX-License-Identifier: MPL-2.0
//! Carousel positioning.
//!
//! The strip is laid out left to right with a leading inset of one gap and a
//! gutter of one gap after every image. [`compute_layout`] returns the
//! distance from the strip's leading edge to the centre of the selected
//! image; translating the strip by `viewport_width / 2 - offset` centres that
//! image in the viewport.

use super::image::{DerivedImage, ImageId};
use crate::error::{Error, Result};
use std::ops::ControlFlow;

/// Layout constants shared by every image of a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Height every image is scaled to on wide viewports.
    pub display_height: f32,
    /// Spacing added after each image.
    pub gap: f32,
}

/// Position of the selected image.
///
/// Index and offset come out of a single computation over the same
/// selection and are always replaced together.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    selected_id: ImageId,
    selected_index: usize,
    offset: f32,
}

impl CarouselState {
    pub fn selected_id(&self) -> &ImageId {
        &self.selected_id
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Distance from the strip's leading edge to the selected image's centre.
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// Computes the carousel state for `selected`.
///
/// Images after the selected one do not contribute to the offset.
pub fn compute_layout(
    images: &[DerivedImage],
    selected: &ImageId,
    gap: f32,
) -> Result<CarouselState> {
    if images.is_empty() {
        return Err(Error::EmptyImageList);
    }

    let walk = images
        .iter()
        .enumerate()
        .try_fold(0.0_f32, |offset, (index, image)| {
            if image.id() == selected {
                ControlFlow::Break((index, offset + image.resized_width / 2.0 + gap))
            } else {
                ControlFlow::Continue(offset + image.resized_width + gap)
            }
        });

    match walk {
        ControlFlow::Break((selected_index, offset)) => Ok(CarouselState {
            selected_id: selected.clone(),
            selected_index,
            offset,
        }),
        ControlFlow::Continue(_) => Err(Error::InvalidSelection(selected.clone())),
    }
}

/// Left edge of every image on the strip, measured from the strip origin.
pub fn image_left_edges(images: &[DerivedImage], gap: f32) -> Vec<f32> {
    images
        .iter()
        .scan(gap, |left, image| {
            let edge = *left;
            *left += image.resized_width + gap;
            Some(edge)
        })
        .collect()
}
