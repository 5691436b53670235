//! Integration tests for survey-form

use survey_form::{
    FieldName, FormSettings, FormValues, SubmitOutcome, SurveyForm, SurveyFormConfig,
    TestQuestionSource, validate,
};

fn fill_technology(form: &mut SurveyForm<TestQuestionSource>) {
    form.update_field(FieldName::FullName, "Linus");
    form.update_field(FieldName::Email, "linus@example.org");
    form.update_field(FieldName::SurveyTopic, "Technology");
    form.update_field(FieldName::FavoriteLanguage, "C#");
    form.update_field(FieldName::YearsOfExperience, "7");
    form.update_field(FieldName::Feedback, "Nice and short survey.");
}

#[test]
fn test_health_form_with_ten_character_feedback_is_clean() {
    let values: FormValues = [
        (FieldName::FullName, "A"),
        (FieldName::Email, "a@b.com"),
        (FieldName::SurveyTopic, "Health"),
        (FieldName::ExerciseFrequency, "Daily"),
        (FieldName::DietPreference, "Vegan"),
        (FieldName::Feedback, "1234567890"),
    ]
    .into_iter()
    .collect();

    assert!(validate(&values).is_empty());

    let errors = validate(&values.with(FieldName::Feedback, "short"));
    assert_eq!(
        errors.get(FieldName::Feedback),
        Some("Feedback must be at least 10 characters long")
    );
}

#[test]
fn test_zero_years_is_rejected_for_any_technology_form() {
    let variants = [
        FormValues::new(),
        FormValues::new().with(FieldName::FavoriteLanguage, "Java"),
        FormValues::new()
            .with(FieldName::FullName, "A")
            .with(FieldName::Email, "a@b.com")
            .with(FieldName::Feedback, "long enough feedback"),
    ];
    for values in variants {
        let values = values
            .with(FieldName::SurveyTopic, "Technology")
            .with(FieldName::YearsOfExperience, "0");
        assert!(validate(&values).contains(FieldName::YearsOfExperience));
    }
}

#[test]
fn test_empty_email_never_reports_invalid_format() {
    for topic in ["", "Technology", "Health", "Education", "Other"] {
        let values = FormValues::new().with(FieldName::SurveyTopic, topic);
        assert_eq!(
            validate(&values).get(FieldName::Email),
            Some("Email is required")
        );
    }
}

#[tokio::test]
async fn test_rejected_submit_publishes_errors_per_field() {
    let mut form = SurveyForm::new(TestQuestionSource::new());
    form.update_field(FieldName::Email, "nope");

    let outcome = form.submit();
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(form.errors(), &errors);
    assert_eq!(form.errors().get(FieldName::Email), Some("Email is invalid"));

    form.update_field(FieldName::Email, "yes@example.com");
    assert_eq!(
        form.errors().get(FieldName::Email),
        Some("Email is invalid"),
        "edits must not revalidate"
    );

    form.submit();
    assert!(!form.errors().contains(FieldName::Email));
    assert!(form.errors().contains(FieldName::FullName));
}

#[tokio::test]
async fn test_clean_technology_submit_fetches_questions() {
    let source = TestQuestionSource::new().with_questions(
        "Technology",
        ["What does GHz stand for?", "Who created Linux?"],
    );
    let mut form = SurveyForm::new(source.clone());
    fill_technology(&mut form);

    let outcome = form.submit();
    assert!(outcome.is_accepted());
    assert!(form.errors().is_empty());

    form.settle().await;
    assert_eq!(source.requests(), vec!["Technology"]);

    let view = form.confirmation().expect("popup should be visible");
    assert_eq!(view.snapshot.raw_topic(), "Technology");
    assert_eq!(view.questions.len(), 2);
}

#[tokio::test]
async fn test_snapshot_is_decoupled_from_later_edits() {
    let mut form = SurveyForm::new(TestQuestionSource::new());
    fill_technology(&mut form);

    let outcome = form.submit();
    form.update_field(FieldName::FullName, "Someone Else");
    form.settle().await;

    let snapshot = outcome.snapshot().unwrap();
    assert_eq!(snapshot.values().get(FieldName::FullName), "Linus");
    let view = form.confirmation().unwrap();
    assert_eq!(view.snapshot.values().get(FieldName::FullName), "Linus");
}

#[tokio::test]
async fn test_close_then_resubmit_validates_from_scratch() {
    let mut form = SurveyForm::new(TestQuestionSource::new());
    fill_technology(&mut form);
    form.submit();
    form.settle().await;
    assert!(form.is_popup_visible());

    form.close_popup();
    assert!(!form.is_popup_visible());
    assert!(form.confirmation().is_none());
    assert_eq!(form.values(), &FormValues::new());

    let outcome = form.submit();
    assert!(!outcome.is_accepted());
    assert_eq!(form.errors().len(), 4);

    form.close_popup();
    assert!(!form.is_popup_visible());
}

#[tokio::test]
async fn test_close_can_retain_entries() {
    let settings = FormSettings {
        reset_on_close: false,
    };
    let mut form = SurveyForm::new(TestQuestionSource::new()).with_settings(settings);
    fill_technology(&mut form);
    form.submit();
    form.settle().await;

    form.close_popup();
    assert_eq!(form.values().get(FieldName::FullName), "Linus");

    assert!(form.submit().is_accepted());
    form.settle().await;
    assert!(form.is_popup_visible());
}

#[tokio::test]
async fn test_close_without_submission_keeps_entries() {
    let source = TestQuestionSource::new();
    let mut form = SurveyForm::new(source.clone());
    fill_technology(&mut form);
    form.update_field(FieldName::Email, "not-an-email");
    assert!(!form.submit().is_accepted());

    form.close_popup();
    assert_eq!(form.values().get(FieldName::FullName), "Linus");
    assert_eq!(form.values().get(FieldName::Email), "not-an-email");
    assert!(source.requests().is_empty());
}

#[tokio::test]
async fn test_switching_topic_exempts_previous_topic_fields() {
    let mut form = SurveyForm::new(TestQuestionSource::new());
    fill_technology(&mut form);
    form.update_field(FieldName::YearsOfExperience, "0");
    form.update_field(FieldName::FavoriteLanguage, "");

    form.update_field(FieldName::SurveyTopic, "Health");
    form.update_field(FieldName::ExerciseFrequency, "Weekly");
    form.update_field(FieldName::DietPreference, "Non-Vegetarian");

    let outcome = form.submit();
    assert!(outcome.is_accepted(), "unexpected errors: {:?}", form.errors());
    assert!(!form.errors().contains(FieldName::FavoriteLanguage));
    assert!(!form.errors().contains(FieldName::YearsOfExperience));

    let snapshot = outcome.snapshot().unwrap();
    assert_eq!(snapshot.values().get(FieldName::YearsOfExperience), "0");
    form.settle().await;
}

#[tokio::test]
async fn test_failed_fetch_still_confirms() {
    let source = TestQuestionSource::new().with_failure("Technology", "connection reset");
    let mut form = SurveyForm::new(source);
    fill_technology(&mut form);

    form.submit();
    form.settle().await;

    let view = form.confirmation().expect("popup should be visible");
    assert!(view.questions.is_empty());
}

#[tokio::test]
async fn test_stale_fetch_does_not_overwrite_newer_submission() {
    let source = TestQuestionSource::new()
        .with_questions("Technology", ["stale question"])
        .with_questions("Health", ["How often do you stretch?"])
        .holding("Technology");
    let mut form = SurveyForm::new(source.clone()).with_settings(FormSettings {
        reset_on_close: false,
    });
    fill_technology(&mut form);
    form.submit();

    form.update_field(FieldName::SurveyTopic, "Health");
    form.update_field(FieldName::ExerciseFrequency, "Daily");
    form.update_field(FieldName::DietPreference, "Vegan");
    let second = form.submit();

    source.release("Technology");
    form.settle().await;

    assert_eq!(source.requests().len(), 2);
    let view = form.confirmation().unwrap();
    assert_eq!(view.snapshot.id(), second.snapshot().unwrap().id());
    assert_eq!(view.questions, vec!["How often do you stretch?".to_string()]);
}

#[tokio::test]
async fn test_fetch_resolving_after_close_is_discarded() {
    let source = TestQuestionSource::new().holding("Technology");
    let mut form = SurveyForm::new(source.clone());
    fill_technology(&mut form);
    form.submit();
    tokio::task::yield_now().await;

    form.close_popup();
    source.release("Technology");
    form.settle().await;

    assert!(!form.is_popup_visible());
    assert!(form.controller().snapshot().is_none());
    assert!(form.controller().questions().is_none());
}

#[tokio::test]
async fn test_session_from_config() {
    let config = SurveyFormConfig::from_toml_str("[form]\nreset_on_close = false").unwrap();
    let form = SurveyForm::from_config(&config).unwrap();

    assert!(!form.settings().reset_on_close);
    assert_eq!(
        form.controller().source().config().category_for("Education"),
        Some(9)
    );
    assert!(!form.is_popup_visible());
}

#[test]
fn test_unknown_field_names_are_reported() {
    let mut form = SurveyForm::new(TestQuestionSource::new());
    let err = form.update_field_by_name("favouriteColour", "blue").unwrap_err();
    assert_eq!(err.field_name(), Some("favouriteColour"));
    assert!(form.update_field_by_name("feedback", "Great!").is_ok());
    assert_eq!(form.values().get(FieldName::Feedback), "Great!");
}
