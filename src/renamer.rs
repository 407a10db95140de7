// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Renaming images to their generated names

use std::path::{Path, PathBuf};
use tracing::info;

use crate::sanitize::first_word;
use crate::Result;

/// Compute the destination for `original` given a generated name.
///
/// Only the first whitespace-delimited word of `name` is used, the original
/// extension is kept verbatim and the file stays in its directory. Returns
/// `None` when no usable name remains.
pub fn target_path(original: &Path, name: &str) -> Option<PathBuf> {
    let stem = first_word(name);
    if stem.is_empty() {
        return None;
    }

    let file_name = match original.extension() {
        Some(ext) => format!("{}.{}", stem, ext.to_string_lossy()),
        None => stem.to_string(),
    };

    Some(original.with_file_name(file_name))
}

/// Move `original` to `target`, replacing any file already there
pub fn rename_file(original: &Path, target: &Path) -> Result<()> {
    std::fs::rename(original, target)?;
    info!("Renamed {:?} to {:?}", original, target);
    Ok(())
}
