//! Question source backed by the Open Trivia Database HTTP API.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use tracing::debug;

use crate::{EnrichmentConfig, EnrichmentError, EnrichmentResult, QuestionSource};

/// Response code for a successful lookup.
const CODE_SUCCESS: u8 = 0;
/// Response code when the category has fewer questions than requested.
const CODE_NO_RESULTS: u8 = 1;

#[derive(Debug, Deserialize)]
struct TriviaEnvelope {
    response_code: u8,
    #[serde(default)]
    results: Vec<TriviaEntry>,
}

#[derive(Debug, Deserialize)]
struct TriviaEntry {
    question: String,
}

/// Fetches trivia questions for a topic with a single HTTP GET.
///
/// Topics are mapped to trivia categories through [`EnrichmentConfig`];
/// questions are requested base64-encoded so they arrive without HTML
/// entities.
#[derive(Debug, Clone)]
pub struct OpenTriviaClient {
    http: reqwest::Client,
    config: EnrichmentConfig,
}

impl OpenTriviaClient {
    /// Create a client with the configured per-request timeout.
    pub fn new(config: EnrichmentConfig) -> Result<Self, EnrichmentError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &EnrichmentConfig {
        &self.config
    }
}

#[async_trait]
impl QuestionSource for OpenTriviaClient {
    async fn fetch(&self, topic: &str) -> Result<EnrichmentResult, EnrichmentError> {
        let category = self
            .config
            .category_for(topic)
            .ok_or_else(|| EnrichmentError::UnmappedTopic(topic.to_string()))?;

        debug!(
            url = %self.config.base_url,
            topic,
            category,
            amount = self.config.amount,
            "requesting trivia questions"
        );

        let body = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("amount", self.config.amount.to_string()),
                ("category", category.to_string()),
                ("encode", "base64".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_response(&body)
    }
}

/// Decode a response body into question strings.
fn parse_response(body: &str) -> Result<EnrichmentResult, EnrichmentError> {
    let envelope: TriviaEnvelope =
        serde_json::from_str(body).map_err(|err| EnrichmentError::Decode(err.to_string()))?;

    match envelope.response_code {
        CODE_SUCCESS => envelope
            .results
            .iter()
            .map(|entry| decode_text(&entry.question))
            .collect(),
        CODE_NO_RESULTS => Ok(Vec::new()),
        code => Err(EnrichmentError::Service { code }),
    }
}

fn decode_text(encoded: &str) -> Result<String, EnrichmentError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|err| EnrichmentError::Decode(format!("question is not base64: {err}")))?;
    String::from_utf8(bytes)
        .map_err(|err| EnrichmentError::Decode(format!("question is not UTF-8: {err}")))
}
