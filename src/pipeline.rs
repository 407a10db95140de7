// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Per-directory labeling: scan, describe, sanitize, rename

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::describer::Describer;
use crate::renamer::{rename_file, target_path};
use crate::sanitize::sanitize;
use crate::scanner::scan_directory;
use crate::{PicLabelError, Result};

/// What happened to a single image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// File was moved to `to`
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: file would have been moved to `to`
    WouldRename { from: PathBuf, to: PathBuf },
    /// File left untouched
    Skipped { path: PathBuf, reason: String },
}

/// Runs the labeling pipeline with a given describer
pub struct Labeler<D> {
    describer: D,
    dry_run: bool,
}

impl<D: Describer> Labeler<D> {
    pub fn new(describer: D) -> Self {
        Self { describer, dry_run: false }
    }

    /// Report renames without touching the filesystem
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every image directly inside `dir`, one at a time.
    ///
    /// Model errors skip the affected image; filesystem errors abort.
    pub async fn process_directory(&self, dir: &Path) -> Result<Vec<Outcome>> {
        let images = scan_directory(dir)?;
        info!("Found {} images in {:?}", images.len(), dir);

        let mut outcomes = Vec::with_capacity(images.len());
        for image in images {
            outcomes.push(self.process_file(&image).await?);
        }

        Ok(outcomes)
    }

    /// Describe, sanitize and rename one image
    pub async fn process_file(&self, path: &Path) -> Result<Outcome> {
        let raw = match self.describer.describe(path).await {
            Ok(text) => text,
            Err(PicLabelError::Model(e)) => {
                warn!("Error: {} ({:?} left unchanged)", e, path);
                return Ok(Outcome::Skipped { path: path.to_path_buf(), reason: e.to_string() });
            }
            Err(e) => return Err(e),
        };

        let name = sanitize(&raw);
        debug!("{} suggested {:?}, sanitized to {:?}", self.describer.name(), raw, name);

        let Some(target) = target_path(path, &name) else {
            warn!("No usable name generated for {:?}, skipping", path);
            return Ok(Outcome::Skipped {
                path: path.to_path_buf(),
                reason: "empty name".to_string(),
            });
        };

        if self.dry_run {
            println!("Would rename: {} -> {}", path.display(), target.display());
            return Ok(Outcome::WouldRename { from: path.to_path_buf(), to: target });
        }

        rename_file(path, &target)?;
        println!("File renamed: {} -> {}", path.display(), target.display());

        Ok(Outcome::Renamed { from: path.to_path_buf(), to: target })
    }
}
