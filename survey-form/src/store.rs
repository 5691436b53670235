use crate::{
    FieldName, FormError, FormErrors, FormValues, QuestionSource, SubmissionController,
    SubmitOutcome, ValidationRuleset,
};

/// Holds the live form values and the errors from the last validation.
///
/// Edits never run validation: errors only change when the form is
/// validated or submitted, so half-typed input is not flagged while the user
/// is still typing.
#[derive(Debug, Clone, Default)]
pub struct FormStateStore {
    values: FormValues,
    errors: FormErrors,
}

impl FormStateStore {
    /// Create a store with all-empty values and no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with values.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            errors: FormErrors::new(),
        }
    }

    /// Set one field. Other fields and all errors are left untouched.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Set one field identified by its wire name, e.g. `"fieldOfStudy"`.
    ///
    /// An unknown name leaves the store unchanged.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = FieldName::parse(name)?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Recompute all errors from the current values.
    ///
    /// Returns `true` when the form is valid.
    pub fn validate(&mut self, ruleset: &ValidationRuleset) -> bool {
        self.errors = ruleset.validate(&self.values);
        self.errors.is_empty()
    }

    /// Replace the current errors wholesale.
    pub fn publish_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    /// Validate the current values and hand them to `controller`.
    ///
    /// The outcome's errors (none, when accepted) become the store's errors.
    pub fn submit<Q>(&mut self, controller: &SubmissionController<Q>) -> SubmitOutcome
    where
        Q: QuestionSource + 'static,
    {
        let outcome = controller.submit(&self.values);
        self.publish_errors(outcome.errors().cloned().unwrap_or_default());
        outcome
    }

    /// Back to all-empty values and no errors.
    pub fn reset(&mut self) {
        self.values = FormValues::new();
        self.errors = FormErrors::new();
    }
}
