use async_trait::async_trait;

/// Questions fetched for a submitted topic, in display order.
///
/// An empty list is a valid result: the confirmation view then shows no
/// additional questions.
pub type EnrichmentResult = Vec<String>;

/// Error type for question enrichment.
///
/// None of these are fatal: the controller degrades every failure to an empty
/// [`EnrichmentResult`].
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    /// The HTTP request could not be sent or completed.
    #[error("Question request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success response code.
    #[error("Question service returned response code {code}")]
    Service { code: u8 },

    /// The response body could not be decoded.
    #[error("Could not decode question response: {0}")]
    Decode(String),

    /// No question category is configured for the topic.
    #[error("No question category configured for topic '{0}'")]
    UnmappedTopic(String),

    /// Any other source-specific failure.
    #[error("Question source error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl EnrichmentError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error came from the network layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Source of additional questions shown after a successful submission.
///
/// One call per accepted submission; callers do not retry.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch questions for a raw topic value such as `"Technology"`.
    async fn fetch(&self, topic: &str) -> Result<EnrichmentResult, EnrichmentError>;
}
