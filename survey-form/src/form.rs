use tracing::debug;

use crate::{
    ConfirmationView, EnrichmentError, FieldName, FormError, FormErrors, FormSettings,
    FormStateStore, FormValues, OpenTriviaClient, QuestionSource, SubmissionController,
    SubmitOutcome, SurveyFormConfig,
};

/// A survey form session: live values and errors plus the submission lifecycle.
///
/// This is the surface a UI binds to. Edit events go to
/// [`update_field`](Self::update_field), the submit button to
/// [`submit`](Self::submit), and the popup's close button to
/// [`close_popup`](Self::close_popup).
pub struct SurveyForm<Q> {
    store: FormStateStore,
    controller: SubmissionController<Q>,
    settings: FormSettings,
}

impl SurveyForm<OpenTriviaClient> {
    /// Create a session that fetches questions from the configured trivia service.
    pub fn from_config(config: &SurveyFormConfig) -> Result<Self, EnrichmentError> {
        let client = OpenTriviaClient::new(config.enrichment.clone())?;
        Ok(Self::new(client).with_settings(config.form.clone()))
    }
}

impl<Q> SurveyForm<Q>
where
    Q: QuestionSource + 'static,
{
    /// Create a session with an empty form and default settings.
    pub fn new(source: Q) -> Self {
        Self {
            store: FormStateStore::new(),
            controller: SubmissionController::new(source),
            settings: FormSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: FormSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Swap in a custom controller, e.g. one with different rules.
    pub fn with_controller(mut self, controller: SubmissionController<Q>) -> Self {
        self.controller = controller;
        self
    }

    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.store.update_field(field, value);
    }

    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.store.update_field_by_name(name, value)
    }

    pub fn values(&self) -> &FormValues {
        self.store.values()
    }

    pub fn errors(&self) -> &FormErrors {
        self.store.errors()
    }

    /// Validate and submit the current values.
    ///
    /// Outside a Tokio runtime no questions are fetched.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.store.submit(&self.controller)
    }

    /// Wait for outstanding question fetches.
    pub async fn settle(&self) {
        self.controller.settle().await;
    }

    pub fn is_popup_visible(&self) -> bool {
        self.controller.is_popup_visible()
    }

    /// The confirmation contents, while the popup is shown.
    pub fn confirmation(&self) -> Option<ConfirmationView> {
        self.controller.confirmation()
    }

    /// Dismiss the confirmation popup.
    ///
    /// With `reset_on_close` the form also starts over with empty values,
    /// but only when a submission was actually being confirmed; otherwise
    /// the previous entries stay for editing.
    pub fn close_popup(&mut self) {
        let confirming = self.controller.snapshot().is_some();
        self.controller.close_popup();
        if confirming && self.settings.reset_on_close {
            debug!("resetting form after confirmation");
            self.store.reset();
        }
    }

    pub fn controller(&self) -> &SubmissionController<Q> {
        &self.controller
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }
}
