// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors are `Clone` so they can travel inside Iced messages. Every
//! variant describes a local failure (a violated precondition or an I/O
//! problem); none of them is worth retrying.

use crate::carousel::ImageId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The carousel was asked to lay out zero images.
    #[error("Carousel Error: no images to display")]
    EmptyImageList,

    /// A selection referred to an id that is not part of the image list.
    #[error("Carousel Error: unknown image id '{0}'")]
    InvalidSelection(ImageId),

    /// Resolved dimensions contained a zero side.
    #[error("Carousel Error: image '{id}' has invalid dimensions {width}x{height}")]
    InvalidDimensions { id: ImageId, width: u32, height: u32 },

    /// Two sources share the same id.
    #[error("Carousel Error: duplicate image id '{0}'")]
    DuplicateImageId(ImageId),

    /// The image header could not be read.
    #[error("Decode Error: {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
