// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for building the carousel's image list.
//!
//! This module finds supported image files, sorts them according to the
//! configured sort order and turns them into [`ImageSource`]s whose id is
//! the file name.

use crate::carousel::{ImageId, ImageSource};
use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Extensions the carousel can display.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico",
];

/// Scans `directory` (non-recursively) for supported images.
///
/// Returns an empty list when the directory holds no images; deciding
/// whether to show anything is up to the caller.
pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Vec<ImageSource>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files, sort_order);
    tracing::debug!(
        directory = %directory.display(),
        count = image_files.len(),
        "scanned directory"
    );

    sources_from_paths(image_files)
}

/// Builds sources from an explicit list of files, keeping their order.
///
/// Two files with the same name would get the same id, so they are rejected.
pub fn sources_from_paths<I>(paths: I) -> Result<Vec<ImageSource>>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for path in paths {
        let id = image_id_for(&path)?;
        if !seen.insert(id.clone()) {
            return Err(Error::DuplicateImageId(id));
        }
        sources.push(ImageSource::new(id, path));
    }

    Ok(sources)
}

/// Checks if a file has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn image_id_for(path: &Path) -> Result<ImageId> {
    path.file_name()
        .map(|name| ImageId::new(name.to_string_lossy()))
        .ok_or_else(|| Error::Io(format!("{} has no file name", path.display())))
}

fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}
