// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for autopiclabel

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Instruction sent to the vision model with every image
pub const DEFAULT_PROMPT: &str = "Generate filename: \
    Use snake case \
    Max 25 characters \
    English only \
    No file extension \
    No special characters \
    Only key elements of the image \
    One word if possible \
    Noun-verb format \
    Respond only with the filename";

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// AI engine configuration
    #[serde(default)]
    pub ai_engine: EngineConfig,

    /// Prompt sent alongside each image
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout; `None` waits for the model indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

// Default value functions
fn default_url() -> String { "http://localhost:11434".to_string() }
fn default_model() -> String { "llava".to_string() }
fn default_prompt() -> String { DEFAULT_PROMPT.to_string() }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_engine: EngineConfig::default(),
            prompt: default_prompt(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::PicLabelError::Config(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if self.ai_engine.model.trim().is_empty() {
            return Err(crate::PicLabelError::Config("model name is empty".to_string()));
        }
        if !self.ai_engine.url.starts_with("http://") && !self.ai_engine.url.starts_with("https://") {
            return Err(crate::PicLabelError::Config(format!(
                "engine url must start with http:// or https://, got '{}'",
                self.ai_engine.url
            )));
        }
        if self.prompt.trim().is_empty() {
            return Err(crate::PicLabelError::Config("prompt is empty".to_string()));
        }
        Ok(())
    }
}
