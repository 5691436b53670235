use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FieldName, SurveyTopic};

/// Current values of every form field.
///
/// Every field is always present; a fresh form holds empty strings. Values
/// of fields outside the active topic are kept as entered; the ruleset just
/// does not look at them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<FieldName, String>",
    into = "BTreeMap<FieldName, String>"
)]
pub struct FormValues {
    values: BTreeMap<FieldName, String>,
}

impl FormValues {
    /// Create a form with all-empty defaults.
    pub fn new() -> Self {
        Self {
            values: FieldName::all().map(|field| (field, String::new())).collect(),
        }
    }

    /// Builder-style setter, handy for constructing fixtures.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set one field, leaving all others untouched.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Get the value of a field (empty when never set).
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Check whether a field holds the empty string.
    pub fn is_empty(&self, field: FieldName) -> bool {
        self.get(field).is_empty()
    }

    /// The raw `surveyTopic` discriminator value.
    pub fn raw_topic(&self) -> &str {
        self.get(FieldName::SurveyTopic)
    }

    /// The selected topic, if the discriminator holds a recognized value.
    pub fn topic(&self) -> Option<SurveyTopic> {
        SurveyTopic::from_value(self.raw_topic())
    }

    /// Iterate over all fields and their values, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<FieldName, String>> for FormValues {
    fn from(partial: BTreeMap<FieldName, String>) -> Self {
        let mut values = Self::new();
        values.values.extend(partial);
        values
    }
}

impl From<FormValues> for BTreeMap<FieldName, String> {
    fn from(values: FormValues) -> Self {
        values.values
    }
}

impl<V: Into<String>> FromIterator<(FieldName, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldName, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (field, value) in iter {
            values.set(field, value);
        }
        values
    }
}
