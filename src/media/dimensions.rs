// SPDX-License-Identifier: MPL-2.0
//! Intrinsic dimension resolution.
//!
//! The carousel needs every image's width and height before it can compute
//! a single offset, so dimensions are read up front, off the UI thread, and
//! the whole list is handed over only once every size is known.

use crate::carousel::{Dimensions, Image, ImageSource};
use crate::error::{Error, Result};
use std::path::Path;

/// Reads the size of the image at `path` from its header.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    let decode_error = |message: String| Error::Decode {
        path: path.to_path_buf(),
        message,
    };

    image_rs::ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| decode_error(e.to_string()))
}

/// Resolves one source into an [`Image`].
pub fn resolve_image(source: ImageSource) -> Result<Image> {
    let (width, height) = probe_dimensions(&source.src)?;
    let dimensions = Dimensions::new(&source.id, width, height)?;
    Ok(Image::new(source, dimensions))
}

/// Resolves every source, keeping the input order.
///
/// Fails on the first image that cannot be probed.
pub fn resolve_all(sources: Vec<ImageSource>) -> Result<Vec<Image>> {
    sources
        .into_iter()
        .map(|source| {
            resolve_image(source).inspect_err(|err| {
                tracing::warn!(%err, "failed to resolve image dimensions");
            })
        })
        .collect()
}

/// Resolves every source on the blocking thread pool.
pub async fn resolve_dimensions(sources: Vec<ImageSource>) -> Result<Vec<Image>> {
    tokio::task::spawn_blocking(move || resolve_all(sources))
        .await
        .map_err(|e| Error::Io(format!("dimension task failed: {}", e)))?
}
