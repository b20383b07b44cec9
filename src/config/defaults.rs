// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Layout**: Display height and gap of the image strip
//! - **Gesture**: Swipe distance threshold
//! - **Breakpoints**: Viewport widths switching to paged layout

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height every image is scaled to on wide viewports (pixels).
pub const DEFAULT_DISPLAY_HEIGHT: f32 = 640.0;

pub const MIN_DISPLAY_HEIGHT: f32 = 64.0;

pub const MAX_DISPLAY_HEIGHT: f32 = 4096.0;

/// Spacing added after each image of the strip (pixels).
pub const DEFAULT_IMAGE_GAP: f32 = 6.0;

pub const MIN_IMAGE_GAP: f32 = 0.0;

pub const MAX_IMAGE_GAP: f32 = 128.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel for a touch to count as a swipe (pixels).
/// The comparison is strict: a travel equal to the threshold is a tap.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 30.0;

pub const MIN_SWIPE_THRESHOLD: f32 = 1.0;

pub const MAX_SWIPE_THRESHOLD: f32 = 500.0;

// ==========================================================================
// Breakpoint Defaults
// ==========================================================================

/// Largest viewport width treated as a phone.
pub const DEFAULT_MOBILE_MAX_WIDTH: f32 = 699.0;

/// Largest viewport width treated as a tablet.
pub const DEFAULT_TABLET_MAX_WIDTH: f32 = 1023.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISPLAY_HEIGHT > 0.0);
    assert!(DEFAULT_DISPLAY_HEIGHT >= MIN_DISPLAY_HEIGHT);
    assert!(DEFAULT_DISPLAY_HEIGHT <= MAX_DISPLAY_HEIGHT);

    assert!(MIN_IMAGE_GAP >= 0.0);
    assert!(DEFAULT_IMAGE_GAP >= MIN_IMAGE_GAP);
    assert!(DEFAULT_IMAGE_GAP <= MAX_IMAGE_GAP);

    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    assert!(DEFAULT_MOBILE_MAX_WIDTH < DEFAULT_TABLET_MAX_WIDTH);
};
