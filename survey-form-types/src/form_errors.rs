use std::collections::BTreeMap;

use serde::Serialize;

use crate::FieldName;

/// Validation messages keyed by field.
///
/// A missing key means the field is currently valid. Each field carries at
/// most one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: BTreeMap<FieldName, String>,
}

impl FormErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Record a message for a field.
    ///
    /// If the field already has a message, the existing one is kept: the first
    /// violation found for a field is the one reported.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Get the message for a field.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Check if a field has a message.
    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterate over invalid fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// The invalid fields, in form order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when every field is valid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl IntoIterator for FormErrors {
    type Item = (FieldName, String);
    type IntoIter = std::collections::btree_map::IntoIter<FieldName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
