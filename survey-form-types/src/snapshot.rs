use std::fmt;

use serde::Serialize;

use crate::{FieldName, FormValues, SurveyTopic};

/// Identity of one accepted submission.
///
/// Ids increase monotonically within a controller, so a result tagged with an
/// older id can be recognized as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable copy of the form values taken when a submission was accepted.
///
/// Later edits to the live form do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedSnapshot {
    id: SubmissionId,
    values: FormValues,
}

impl SubmittedSnapshot {
    pub fn new(id: SubmissionId, values: FormValues) -> Self {
        Self { id, values }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The raw topic the submission was made under.
    pub fn raw_topic(&self) -> &str {
        self.values.raw_topic()
    }

    pub fn topic(&self) -> Option<SurveyTopic> {
        self.values.topic()
    }

    /// Label/value lines for the confirmation view.
    ///
    /// Lists the universal fields plus the fields of the submitted topic only,
    /// with feedback last.
    pub fn summary(&self) -> Vec<(&'static str, &str)> {
        let topic_fields = self.topic().map(SurveyTopic::fields).unwrap_or_default();
        [FieldName::FullName, FieldName::Email, FieldName::SurveyTopic]
            .iter()
            .chain(topic_fields)
            .chain([FieldName::Feedback].iter())
            .map(|field| (field.label(), self.values.get(*field)))
            .collect()
    }
}
