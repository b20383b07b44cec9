// SPDX-License-Identifier: MPL-2.0
//! Image descriptions consumed by the carousel.
//!
//! An image goes through three stages: an [`ImageSource`] as handed over by
//! the image list supplier, an [`Image`] once its intrinsic dimensions have
//! been resolved, and a [`DerivedImage`] carrying the width it occupies once
//! scaled to the shared display height.

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;

/// Images narrower than this aspect ratio fill the viewport height when paged.
const FIXED_HEIGHT_ASPECT_LIMIT: f32 = 5.0 / 3.0;

/// Stable identifier of an image within one carousel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An image as supplied by the caller, before its dimensions are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub id: ImageId,
    pub src: PathBuf,
}

impl ImageSource {
    pub fn new(id: impl Into<ImageId>, src: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
        }
    }
}

/// Intrinsic pixel size of an image. Both sides are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validates the size reported for `id`.
    pub fn new(id: &ImageId, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                id: id.clone(),
                width,
                height,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// An image whose dimensions have been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: ImageId,
    pub src: PathBuf,
    pub dimensions: Dimensions,
}

impl Image {
    pub fn new(source: ImageSource, dimensions: Dimensions) -> Self {
        Self {
            id: source.id,
            src: source.src,
            dimensions,
        }
    }
}

/// An image scaled to the carousel's fixed display height.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedImage {
    pub image: Image,
    /// Width after uniform scaling to the display height.
    pub resized_width: f32,
}

impl DerivedImage {
    pub fn new(image: Image, display_height: f32) -> Self {
        let dimensions = image.dimensions;
        let resized_width =
            dimensions.width() as f32 * (display_height / dimensions.height() as f32);
        Self {
            image,
            resized_width,
        }
    }

    pub fn id(&self) -> &ImageId {
        &self.image.id
    }

    /// Whether the image should fill the viewport height on paged layouts.
    pub fn is_fixed_height(&self) -> bool {
        self.image.dimensions.aspect_ratio() < FIXED_HEIGHT_ASPECT_LIMIT
    }
}

/// Scales every image to `display_height`, keeping the input order.
pub fn derive_images(images: Vec<Image>, display_height: f32) -> Vec<DerivedImage> {
    images
        .into_iter()
        .map(|image| DerivedImage::new(image, display_height))
        .collect()
}

#[cfg(test)]
pub(crate) fn test_image(id: &str, width: u32, height: u32) -> Image {
    let id = ImageId::from(id);
    let dimensions = Dimensions::new(&id, width, height).expect("valid test dimensions");
    Image {
        src: PathBuf::from(format!("{}.png", id)),
        id,
        dimensions,
    }
}
