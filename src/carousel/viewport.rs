// SPDX-License-Identifier: MPL-2.0
//! Responsive strip placement.
//!
//! Wide viewports centre the selected image using the pixel offset. Narrow
//! viewports show one image per page and move the strip by whole viewport
//! widths using the selected index.

use super::layout::CarouselState;

/// Widths at which the carousel switches to paged layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Largest width still treated as a phone.
    pub mobile_max_width: f32,
    /// Largest width still treated as a tablet.
    pub tablet_max_width: f32,
}

/// Size class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f32, breakpoints: Breakpoints) -> Self {
        if width <= breakpoints.mobile_max_width {
            ViewportClass::Mobile
        } else if width <= breakpoints.tablet_max_width {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_paged(self) -> bool {
        !matches!(self, ViewportClass::Desktop)
    }
}

/// Horizontal translation applied to the whole strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripTransform {
    /// Images keep the display height and the selected one is centred.
    Centered { translate_x: f32 },
    /// Each image occupies one viewport-wide page.
    Paged { translate_x: f32 },
}

impl StripTransform {
    pub fn new(state: &CarouselState, class: ViewportClass, viewport_width: f32) -> Self {
        if class.is_paged() {
            StripTransform::Paged {
                translate_x: -(state.selected_index() as f32 * viewport_width),
            }
        } else {
            StripTransform::Centered {
                translate_x: viewport_width / 2.0 - state.offset(),
            }
        }
    }

    pub fn translate_x(&self) -> f32 {
        match *self {
            StripTransform::Centered { translate_x } | StripTransform::Paged { translate_x } => {
                translate_x
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::image::{derive_images, test_image, ImageId};
    use crate::carousel::layout::compute_layout;
    use crate::test_utils::assert_abs_diff_eq;

    const BREAKPOINTS: Breakpoints = Breakpoints {
        mobile_max_width: 699.0,
        tablet_max_width: 1023.0,
    };

    #[test]
    fn classifies_widths_on_breakpoints() {
        assert_eq!(ViewportClass::from_width(375.0, BREAKPOINTS), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(699.0, BREAKPOINTS), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(700.0, BREAKPOINTS), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(1023.0, BREAKPOINTS), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(1024.0, BREAKPOINTS), ViewportClass::Desktop);
    }

    #[test]
    fn desktop_centres_selected_image() {
        let images = derive_images(
            vec![test_image("a", 300, 640), test_image("b", 600, 640)],
            640.0,
        );
        let state = compute_layout(&images, &ImageId::from("b"), 6.0).unwrap();
        let transform = StripTransform::new(&state, ViewportClass::Desktop, 1280.0);
        assert!(matches!(transform, StripTransform::Centered { .. }));
        assert_abs_diff_eq!(transform.translate_x(), 640.0 - 612.0, epsilon = 1e-3);
    }

    #[test]
    fn narrow_viewports_page_by_index() {
        let images = derive_images(
            vec![
                test_image("a", 300, 640),
                test_image("b", 600, 640),
                test_image("c", 600, 640),
            ],
            640.0,
        );
        let state = compute_layout(&images, &ImageId::from("c"), 6.0).unwrap();
        for class in [ViewportClass::Mobile, ViewportClass::Tablet] {
            let transform = StripTransform::new(&state, class, 400.0);
            assert_eq!(transform, StripTransform::Paged { translate_x: -800.0 });
        }
    }
}
