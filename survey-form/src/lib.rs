//! # survey-form
//!
//! Form state, topic-driven validation and the submission lifecycle of a
//! multi-section survey, with post-submission question enrichment.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_form::{FieldName, SurveyForm, SubmitOutcome, TestQuestionSource};
//!
//! let mut form = SurveyForm::new(TestQuestionSource::new());
//! form.update_field(FieldName::FullName, "Ada Lovelace");
//! form.update_field_by_name("surveyTopic", "Technology")?;
//!
//! match form.submit() {
//!     SubmitOutcome::Rejected(errors) => render_errors(&errors),
//!     SubmitOutcome::Accepted(snapshot) => {
//!         form.settle().await;
//!         if let Some(view) = form.confirmation() {
//!             render_confirmation(&view);
//!         }
//!     }
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`FormStateStore`] - values and errors; edits never trigger validation
//! - [`ValidationRuleset`] - universal rules plus a topic -> rules table
//! - [`SubmissionController`] - validate, snapshot, fetch questions, popup state
//! - [`QuestionSource`] - the async question boundary, implemented by
//!   [`OpenTriviaClient`] and, for tests, [`TestQuestionSource`]
//! - [`SurveyForm`] - a session tying the above together for a UI layer
//!
//! The library logs through `tracing` and never installs a subscriber.

// Re-export all types from survey-form-types
pub use survey_form_types::*;

mod config;
pub use config::{ConfigError, EnrichmentConfig, FormSettings, SurveyFormConfig};

mod enrichment;
pub use enrichment::{EnrichmentError, EnrichmentResult, QuestionSource};

mod open_trivia;
pub use open_trivia::OpenTriviaClient;

mod store;
pub use store::FormStateStore;

mod controller;
pub use controller::{ConfirmationView, SubmissionController, SubmitOutcome};

mod form;
pub use form::SurveyForm;

// Scripted question source for testing without network access
mod test_source;
pub use test_source::TestQuestionSource;
