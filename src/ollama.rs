// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Ollama API client for local vision inference

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::ModelError;

/// Ollama API client
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    images: Vec<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct ModelInfo {
    name: String,
}

impl OllamaClient {
    /// Create a new Ollama client. `timeout` of `None` never gives up on a request.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ModelError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url: normalize_url(base_url) })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if Ollama is available
    pub async fn health_check(&self) -> Result<(), ModelError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client
            .get(&url)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                ModelError::Unavailable(format!(
                    "Cannot connect to Ollama at {}: {}",
                    self.base_url, e
                ))
            })?;

        if !response.status().is_success() {
            return Err(ModelError::Unavailable(format!(
                "Ollama at {} answered {}",
                self.base_url,
                response.status()
            )));
        }

        Ok(())
    }

    /// List available models
    pub async fn list_models(&self) -> Result<Vec<String>, ModelError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client
            .get(&url)
            .send()
            .await?;

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Check if a specific model is available
    pub async fn model_available(&self, model: &str) -> Result<bool, ModelError> {
        let models = self.list_models().await?;
        Ok(models.iter().any(|m| m == model || m.starts_with(&format!("{}:", model))))
    }

    /// Generate with image (for vision models)
    pub async fn generate_with_image(
        &self,
        model: &str,
        prompt: &str,
        image_base64: String,
    ) -> Result<String, ModelError> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            images: vec![image_base64],
        };

        debug!("Sending vision request to Ollama: model={}", model);

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(ModelError::Status { status: status.as_u16(), body });
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;
        Ok(result.response)
    }
}

/// Strip trailing slashes and endpoint paths from a configured URL
fn normalize_url(base_url: &str) -> String {
    base_url
        .trim_end_matches('/')
        .replace("/api/generate", "")
        .replace("/api/chat", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("http://localhost:11434/"), "http://localhost:11434");
        assert_eq!(normalize_url("http://localhost:11434/api/generate"), "http://localhost:11434");
        assert_eq!(normalize_url("http://host:1/api/chat"), "http://host:1");
    }

    #[tokio::test]
    async fn test_generate_with_image_sends_prompt_and_image() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .json_body(json!({
                    "model": "llava",
                    "prompt": "name it",
                    "stream": false,
                    "images": ["aGVsbG8="]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"model": "llava", "response": " red_apple ", "done": true}));
        }).await;

        let client = OllamaClient::new(&server.base_url(), None).unwrap();
        let text = client
            .generate_with_image("llava", "name it", "aGVsbG8=".to_string())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, " red_apple ");
    }

    #[tokio::test]
    async fn test_error_status_carries_backend_message() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(404).json_body(json!({"error": "model 'llava' not found"}));
        }).await;

        let client = OllamaClient::new(&server.base_url(), None).unwrap();
        let err = client
            .generate_with_image("llava", "name it", String::new())
            .await
            .unwrap_err();

        match err {
            ModelError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "model 'llava' not found");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(200).body("not json");
        }).await;

        let client = OllamaClient::new(&server.base_url(), None).unwrap();
        let err = client
            .generate_with_image("llava", "name it", String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::Decode(_)));
    }

    #[tokio::test]
    async fn test_model_available_matches_tagged_names() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/api/tags");
            then.status(200).json_body(json!({
                "models": [{"name": "llava:latest"}, {"name": "moondream:1.8b"}]
            }));
        }).await;

        let client = OllamaClient::new(&server.base_url(), None).unwrap();
        client.health_check().await.unwrap();
        assert!(client.model_available("llava").await.unwrap());
        assert!(client.model_available("moondream").await.unwrap());
        assert!(!client.model_available("llama").await.unwrap());
    }

    #[tokio::test]
    async fn test_health_check_fails_when_unreachable() {
        // Port 9 (discard) is not served by anything in the test environment
        let client = OllamaClient::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let err = client.health_check().await.unwrap_err();
        assert!(matches!(err, ModelError::Unavailable(_)));
    }
}
