//! Scripted question source for testing without network access.
//!
//! `TestQuestionSource` answers each topic with pre-defined questions or a
//! failure, records every topic it was asked for, and can hold a topic's
//! response until the test releases it.
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_form::{SubmissionController, TestQuestionSource};
//!
//! let source = TestQuestionSource::new()
//!     .with_questions("Technology", ["What does CPU stand for?"])
//!     .holding("Technology");
//! let controller = SubmissionController::new(source.clone());
//!
//! controller.submit(&values);
//! assert!(!controller.is_popup_visible());
//!
//! source.release("Technology");
//! controller.settle().await;
//! assert!(controller.is_popup_visible());
//! assert_eq!(source.requests(), vec!["Technology"]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::{EnrichmentError, EnrichmentResult, QuestionSource};

#[derive(Debug, Clone)]
enum Scripted {
    Questions(EnrichmentResult),
    Failure(String),
}

/// A question source that returns pre-configured responses.
///
/// Unscripted topics answer with an empty list. Clones share the request log
/// and the holds, so a test can keep a clone after handing one to a
/// controller. Configure the source before cloning it.
#[derive(Debug, Clone, Default)]
pub struct TestQuestionSource {
    scripted: HashMap<String, Scripted>,
    holds: HashMap<String, Arc<Notify>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestQuestionSource {
    /// Create a source with no scripted topics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `topic` with these questions.
    pub fn with_questions<I, S>(mut self, topic: impl Into<String>, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = questions.into_iter().map(Into::into).collect();
        self.scripted
            .insert(topic.into(), Scripted::Questions(questions));
        self
    }

    /// Fail every fetch for `topic` with a backend error.
    pub fn with_failure(mut self, topic: impl Into<String>, message: impl Into<String>) -> Self {
        self.scripted
            .insert(topic.into(), Scripted::Failure(message.into()));
        self
    }

    /// Hold fetches for `topic` until [`release`](Self::release) is called.
    pub fn holding(mut self, topic: impl Into<String>) -> Self {
        self.holds.insert(topic.into(), Arc::new(Notify::new()));
        self
    }

    /// Let one held fetch for `topic` complete.
    ///
    /// A release that arrives before the fetch is remembered.
    pub fn release(&self, topic: &str) {
        if let Some(gate) = self.holds.get(topic) {
            gate.notify_one();
        }
    }

    /// Topics requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl QuestionSource for TestQuestionSource {
    async fn fetch(&self, topic: &str) -> Result<EnrichmentResult, EnrichmentError> {
        self.requests.lock().push(topic.to_string());

        if let Some(gate) = self.holds.get(topic) {
            gate.notified().await;
        }

        match self.scripted.get(topic) {
            Some(Scripted::Questions(questions)) => Ok(questions.clone()),
            Some(Scripted::Failure(message)) => {
                Err(EnrichmentError::backend(anyhow::anyhow!("{message}")))
            }
            None => Ok(Vec::new()),
        }
    }
}
