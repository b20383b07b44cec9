// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection.
//!
//! Only the first touch of a sequence is recorded. The swipe is decided when
//! the matching end event arrives, by comparing the horizontal distance
//! travelled with a strict threshold.

use serde::{Deserialize, Serialize};

/// Direction requested by a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left past the threshold.
    Next,
    /// Finger moved right past the threshold.
    Previous,
    /// No start recorded, or movement within the threshold.
    None,
}

/// When the recorded start point is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureReset {
    /// Every end event completes the gesture.
    #[default]
    Always,
    /// Only a tap (no selection change) clears the start; a swipe keeps it
    /// until the next tap.
    TapOnly,
}

/// Transient swipe state of one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    start_x: Option<f32>,
    threshold: f32,
    reset: GestureReset,
}

impl GestureTracker {
    pub fn new(threshold: f32, reset: GestureReset) -> Self {
        Self {
            start_x: None,
            threshold,
            reset,
        }
    }

    /// Records `x` unless a gesture is already in progress.
    pub fn on_gesture_start(&mut self, x: f32) {
        if self.start_x.is_none() {
            self.start_x = Some(x);
        }
    }

    /// Classifies the gesture ending at `x`.
    pub fn on_gesture_end(&mut self, x: f32) -> Swipe {
        let Some(start_x) = self.start_x else {
            return Swipe::None;
        };

        let delta = start_x - x;
        let swipe = if delta > self.threshold {
            Swipe::Next
        } else if delta < -self.threshold {
            Swipe::Previous
        } else {
            Swipe::None
        };

        if self.reset == GestureReset::Always || swipe == Swipe::None {
            self.start_x = None;
        }

        swipe
    }

    /// Drops any recorded start point.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn start_x(&self) -> Option<f32> {
        self.start_x
    }

    pub fn is_in_progress(&self) -> bool {
        self.start_x.is_some()
    }
}
