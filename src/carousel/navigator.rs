// SPDX-License-Identifier: MPL-2.0
//! Per-modal carousel instance.
//!
//! [`Carousel`] owns the derived image list, the current [`CarouselState`]
//! and the swipe tracker. Every selection change, whatever its origin
//! (indicator click, swipe, keyboard), goes through [`compute_layout`] and
//! replaces the whole state at once.

use super::gesture::{GestureReset, GestureTracker, Swipe};
use super::image::{derive_images, DerivedImage, Image, ImageId};
use super::layout::{compute_layout, image_left_edges, CarouselState, LayoutMetrics};
use super::viewport::{Breakpoints, StripTransform, ViewportClass};
use crate::config::defaults;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Tunables of a carousel, usually built from the user configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub metrics: LayoutMetrics,
    pub swipe_threshold: f32,
    pub gesture_reset: GestureReset,
    pub breakpoints: Breakpoints,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            metrics: LayoutMetrics {
                display_height: defaults::DEFAULT_DISPLAY_HEIGHT,
                gap: defaults::DEFAULT_IMAGE_GAP,
            },
            swipe_threshold: defaults::DEFAULT_SWIPE_THRESHOLD,
            gesture_reset: GestureReset::default(),
            breakpoints: Breakpoints {
                mobile_max_width: defaults::DEFAULT_MOBILE_MAX_WIDTH,
                tablet_max_width: defaults::DEFAULT_TABLET_MAX_WIDTH,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    images: Vec<DerivedImage>,
    settings: CarouselSettings,
    state: CarouselState,
    gesture: GestureTracker,
    open: bool,
}

impl Carousel {
    /// Builds a closed carousel positioned on the first image.
    ///
    /// Fails on an empty list and on repeated ids, since navigation resolves
    /// positions through the id.
    pub fn new(images: Vec<Image>, settings: CarouselSettings) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = images.iter().find(|image| !seen.insert(&image.id)) {
            return Err(Error::DuplicateImageId(duplicate.id.clone()));
        }

        let images = derive_images(images, settings.metrics.display_height);
        let first = images.first().ok_or(Error::EmptyImageList)?.id().clone();
        let state = compute_layout(&images, &first, settings.metrics.gap)?;

        Ok(Self {
            images,
            settings,
            state,
            gesture: GestureTracker::new(settings.swipe_threshold, settings.gesture_reset),
            open: false,
        })
    }

    pub fn images(&self) -> &[DerivedImage] {
        &self.images
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn selected(&self) -> &DerivedImage {
        &self.images[self.state.selected_index()]
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the carousel. A closed → open transition always starts over
    /// from the first image.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.gesture.cancel();
        let first = self.images[0].id().clone();
        self.replace_state(&first);
        tracing::debug!(images = self.images.len(), "carousel opened");
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("carousel closed");
        }
        self.open = false;
        self.gesture.cancel();
    }

    /// Selects the image with `id`, typically from a page indicator.
    pub fn select_by_id(&mut self, id: &ImageId) -> Result<&CarouselState> {
        self.state = compute_layout(&self.images, id, self.settings.metrics.gap)?;
        tracing::debug!(id = %id, index = self.state.selected_index(), "image selected");
        Ok(&self.state)
    }

    /// Moves to the next image, wrapping to the first one.
    pub fn select_next(&mut self) -> &CarouselState {
        let next = (self.state.selected_index() + 1) % self.images.len();
        let id = self.images[next].id().clone();
        self.replace_state(&id);
        &self.state
    }

    /// Moves to the previous image, wrapping to the last one.
    pub fn select_previous(&mut self) -> &CarouselState {
        let len = self.images.len();
        let previous = (self.state.selected_index() + len - 1) % len;
        let id = self.images[previous].id().clone();
        self.replace_state(&id);
        &self.state
    }

    pub fn on_gesture_start(&mut self, x: f32) {
        self.gesture.on_gesture_start(x);
    }

    /// Completes a gesture. Returns the new state when the selection changed.
    pub fn on_gesture_end(&mut self, x: f32) -> Option<&CarouselState> {
        let swipe = self.gesture.on_gesture_end(x);
        tracing::debug!(?swipe, end_x = x, "gesture ended");
        match swipe {
            Swipe::Next => Some(self.select_next()),
            Swipe::Previous => Some(self.select_previous()),
            Swipe::None => None,
        }
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Page indicators are only meaningful with more than one image.
    pub fn shows_indicators(&self) -> bool {
        self.images.len() > 1
    }

    pub fn viewport_class(&self, viewport_width: f32) -> ViewportClass {
        ViewportClass::from_width(viewport_width, self.settings.breakpoints)
    }

    pub fn strip_transform(&self, viewport_width: f32) -> StripTransform {
        StripTransform::new(
            &self.state,
            self.viewport_class(viewport_width),
            viewport_width,
        )
    }

    /// Left edge of every image on the centred strip, before translation.
    pub fn left_edges(&self) -> Vec<f32> {
        image_left_edges(&self.images, self.settings.metrics.gap)
    }

    fn replace_state(&mut self, id: &ImageId) {
        // Ids are unique and come from our own list, so the lookup cannot miss.
        if let Ok(state) = compute_layout(&self.images, id, self.settings.metrics.gap) {
            self.state = state;
        }
    }
}
