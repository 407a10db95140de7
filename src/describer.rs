// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Image description through a vision model

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::ollama::OllamaClient;
use crate::{AppConfig, Result};

/// Produces a raw text description for an image.
///
/// Backend failures must surface as [`crate::PicLabelError::Model`] so the
/// caller can skip the image; I/O failures reading the image are fatal.
#[async_trait]
pub trait Describer: Send + Sync {
    /// Name of this describer (for logging)
    fn name(&self) -> &str;

    /// Describe one image, returning the model's text response
    async fn describe(&self, image: &Path) -> Result<String>;
}

/// Describer backed by an Ollama vision model
pub struct VisionDescriber {
    client: OllamaClient,
    model: String,
    prompt: String,
}

impl VisionDescriber {
    pub fn new(client: OllamaClient, model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    /// Build from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let timeout = config.ai_engine.timeout_secs.map(Duration::from_secs);
        let client = OllamaClient::new(&config.ai_engine.url, timeout)?;
        Ok(Self::new(client, config.ai_engine.model.clone(), config.prompt.clone()))
    }

    pub fn client(&self) -> &OllamaClient {
        &self.client
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Read and base64-encode the image for the request body
    fn encode_image(path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        Ok(general_purpose::STANDARD.encode(data))
    }
}

#[async_trait]
impl Describer for VisionDescriber {
    fn name(&self) -> &str {
        &self.model
    }

    async fn describe(&self, image: &Path) -> Result<String> {
        info!("Describing image: {:?}", image);

        let image_data = Self::encode_image(image)?;
        let response = self.client
            .generate_with_image(&self.model, &self.prompt, image_data)
            .await?;

        debug!("Model response: {:?}", response);
        Ok(response.trim().to_string())
    }
}
