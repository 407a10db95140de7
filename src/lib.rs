// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! autopiclabel: rename images after what a local vision model sees in them
//!
//! Each image in a directory is sent to an Ollama vision model, the reply is
//! sanitized into a `[a-z0-9_]` token and the file is renamed in place.

pub mod config;
pub mod describer;
pub mod error;
pub mod ollama;
pub mod pipeline;
pub mod renamer;
pub mod sanitize;
pub mod scanner;

pub use config::AppConfig;
pub use error::{ModelError, PicLabelError, Result};
