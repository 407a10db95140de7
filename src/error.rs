// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for autopiclabel

use thiserror::Error;

/// Result type alias for autopiclabel operations
pub type Result<T> = std::result::Result<T, PicLabelError>;

/// Top-level error type.
///
/// Only [`PicLabelError::Model`] is recoverable per file: the pipeline logs it
/// and skips the image. Every other variant aborts the run.
#[derive(Error, Debug)]
pub enum PicLabelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

impl PicLabelError {
    /// True for errors raised by the model backend
    pub fn is_model_error(&self) -> bool {
        matches!(self, Self::Model(_))
    }
}

/// Errors raised by the vision model backend
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Ollama not available: {0}")]
    Unavailable(String),

    #[error("Ollama returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for PicLabelError {
    fn from(e: reqwest::Error) -> Self {
        Self::Model(ModelError::Transport(e))
    }
}
