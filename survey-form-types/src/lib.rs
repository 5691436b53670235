//! Core types for the survey-form crate.
//!
//! This crate provides the presentation-agnostic pieces of a survey form:
//! - `FieldName` and `SurveyTopic` - The fixed set of fields and the topic discriminator
//! - `FormValues` and `FormErrors` - Current field values and per-field error messages
//! - `ValidationRuleset` and `FieldRule` - Topic-driven validation as a lookup table
//! - `SubmittedSnapshot` - The frozen copy of values taken when a submission is accepted

mod field_name;
pub use field_name::FieldName;

mod survey_topic;
pub use survey_topic::SurveyTopic;

mod form_values;
pub use form_values::FormValues;

mod form_errors;
pub use form_errors::FormErrors;

mod ruleset;
pub use ruleset::{
    FieldRule, FormatCheck, MIN_FEEDBACK_CHARS, ValidationRuleset, is_plausible_email,
    is_positive_number, validate,
};

mod snapshot;
pub use snapshot::{SubmissionId, SubmittedSnapshot};

mod error;
pub use error::FormError;
