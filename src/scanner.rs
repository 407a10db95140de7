// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Directory scanning for image files

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::Result;

/// Extensions recognized as images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Check if a file name carries an allow-listed image extension
pub fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// List the image files directly inside `dir`.
///
/// Subdirectories are not descended into. A missing or unreadable directory
/// is returned as an error. Results are sorted by path.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if !path.is_file() {
            continue;
        }

        if is_image(&path) {
            images.push(path);
        } else {
            debug!("Skipping non-image: {:?}", path);
        }
    }

    images.sort();
    Ok(images)
}
