// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::ImageSource;
use crate::config::Config;
use crate::ui::image_modal;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Modal(image_modal::Message),
    /// Reopen the gallery from the backdrop screen.
    OpenGallery,
}

/// Startup data prepared by the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Images to show, in display order.
    pub sources: Vec<ImageSource>,
    pub config: Config,
    /// Set when the settings file could not be used and defaults apply.
    pub config_warning: Option<String>,
}
