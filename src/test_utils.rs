// SPDX-License-Identifier: MPL-2.0
//! Test helpers.
//!
//! Layout values are `f32` sums, so float assertions go through `approx`.

pub use approx::assert_abs_diff_eq;
