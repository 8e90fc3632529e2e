//! Gemini `generateContent` client

use super::CompletionClient;
use crate::config::AiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Gemini REST client
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
            api_key: api_key.into(),
        })
    }

    /// Build from config; `None` when AI is disabled or has no key
    pub fn from_config(config: &AiConfig) -> Result<Option<Self>> {
        config
            .usable_api_key()
            .map(|key| {
                Self::new(
                    &config.base_url,
                    &config.model,
                    key,
                    Duration::from_secs(config.timeout_secs),
                )
            })
            .transpose()
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("Failed to send Gemini request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error {}: {}", status, body);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.trim().is_empty())
            .context("Gemini response contained no text")?;

        debug!(chars = text.len(), "Gemini completion received");
        Ok(text)
    }
}
