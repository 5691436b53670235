use std::sync::LazyLock;

use regex::Regex;

use crate::{FieldName, FormErrors, FormValues, SurveyTopic};

/// Minimum feedback length, in characters.
pub const MIN_FEEDBACK_CHARS: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Lax email shape check: some non-space text, `@`, more non-space text, a
/// dot, and more non-space text.
///
/// The pattern is searched for anywhere in the value, not anchored. This is
/// intentionally far weaker than RFC 5322.
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Accepts values that parse as a number strictly greater than zero.
///
/// Surrounding whitespace is ignored. `NaN` is rejected. The only infinite
/// spellings accepted are `Infinity` and `+Infinity`; `inf`, `infinity` and
/// other case variants are not numbers here.
pub fn is_positive_number(value: &str) -> bool {
    let number = match value.trim() {
        "Infinity" | "+Infinity" => f64::INFINITY,
        trimmed => match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => number,
            _ => return false,
        },
    };
    number > 0.0
}

fn is_long_enough_feedback(value: &str) -> bool {
    value.chars().count() >= MIN_FEEDBACK_CHARS
}

/// A check applied to a field once it is known to be non-empty.
#[derive(Clone, Copy)]
pub struct FormatCheck {
    accepts: fn(&str) -> bool,
    message: &'static str,
}

impl FormatCheck {
    pub const fn new(accepts: fn(&str) -> bool, message: &'static str) -> Self {
        Self { accepts, message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl std::fmt::Debug for FormatCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatCheck")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Describes how one field is validated: it is required, and may carry a
/// follow-up format check.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    field: FieldName,
    required: &'static str,
    format: Option<FormatCheck>,
}

impl FieldRule {
    /// A rule that only requires the field to be non-empty.
    pub const fn required(field: FieldName, message: &'static str) -> Self {
        Self {
            field,
            required: message,
            format: None,
        }
    }

    /// Add a format check, run only when the field is non-empty.
    pub const fn with_format(mut self, accepts: fn(&str) -> bool, message: &'static str) -> Self {
        self.format = Some(FormatCheck::new(accepts, message));
        self
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    /// Check a value against this rule.
    ///
    /// The required check runs first, so an empty value never reports the
    /// format message.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        if value.is_empty() {
            return Err(self.required);
        }
        match self.format {
            Some(format) if !(format.accepts)(value) => Err(format.message),
            _ => Ok(()),
        }
    }
}

/// Validation rules for the survey form.
///
/// Universal rules always apply. Topic rules apply only while the
/// `surveyTopic` discriminator equals their topic; with no recognized topic
/// only the universal rules run.
#[derive(Debug, Clone)]
pub struct ValidationRuleset {
    universal: Vec<FieldRule>,
    topics: Vec<(SurveyTopic, Vec<FieldRule>)>,
}

impl ValidationRuleset {
    /// Create a ruleset with no rules.
    pub fn empty() -> Self {
        Self {
            universal: Vec::new(),
            topics: Vec::new(),
        }
    }

    /// The survey form's rules.
    pub fn standard() -> Self {
        Self::empty()
            .with_universal(FieldRule::required(
                FieldName::FullName,
                "Full Name is required",
            ))
            .with_universal(
                FieldRule::required(FieldName::Email, "Email is required")
                    .with_format(is_plausible_email, "Email is invalid"),
            )
            .with_universal(FieldRule::required(
                FieldName::SurveyTopic,
                "Survey Topic is required",
            ))
            .with_topic_rule(
                SurveyTopic::Technology,
                FieldRule::required(
                    FieldName::FavoriteLanguage,
                    "Favorite Programming Language is required",
                ),
            )
            .with_topic_rule(
                SurveyTopic::Technology,
                FieldRule::required(
                    FieldName::YearsOfExperience,
                    "Years of Experience is required",
                )
                .with_format(
                    is_positive_number,
                    "Years of Experience must be a positive number",
                ),
            )
            .with_topic_rule(
                SurveyTopic::Health,
                FieldRule::required(
                    FieldName::ExerciseFrequency,
                    "Exercise Frequency is required",
                ),
            )
            .with_topic_rule(
                SurveyTopic::Health,
                FieldRule::required(FieldName::DietPreference, "Diet Preference is required"),
            )
            .with_topic_rule(
                SurveyTopic::Education,
                FieldRule::required(
                    FieldName::HighestQualification,
                    "Highest Qualification is required",
                ),
            )
            .with_topic_rule(
                SurveyTopic::Education,
                FieldRule::required(FieldName::FieldOfStudy, "Field of Study is required"),
            )
            .with_universal(
                FieldRule::required(FieldName::Feedback, "Feedback is required").with_format(
                    is_long_enough_feedback,
                    "Feedback must be at least 10 characters long",
                ),
            )
    }

    /// Add a rule that applies regardless of topic.
    pub fn with_universal(mut self, rule: FieldRule) -> Self {
        self.universal.push(rule);
        self
    }

    /// Add a rule that applies only while `topic` is selected.
    pub fn with_topic_rule(mut self, topic: SurveyTopic, rule: FieldRule) -> Self {
        match self.topics.iter_mut().find(|(t, _)| *t == topic) {
            Some((_, rules)) => rules.push(rule),
            None => self.topics.push((topic, vec![rule])),
        }
        self
    }

    /// Rules in effect for the given topic.
    pub fn active_rules(&self, topic: Option<SurveyTopic>) -> impl Iterator<Item = &FieldRule> {
        let topic_rules = topic
            .and_then(|topic| self.topics.iter().find(|(t, _)| *t == topic))
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or_default();
        self.universal.iter().chain(topic_rules)
    }

    /// Fields that must be filled in for the given topic.
    pub fn required_fields(&self, topic: Option<SurveyTopic>) -> Vec<FieldName> {
        let mut fields: Vec<_> = self.active_rules(topic).map(FieldRule::field).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    /// Validate all values, recomputing every error from scratch.
    pub fn validate(&self, values: &FormValues) -> FormErrors {
        let mut errors = FormErrors::new();
        for rule in self.active_rules(values.topic()) {
            if errors.contains(rule.field()) {
                continue;
            }
            if let Err(message) = rule.check(values.get(rule.field())) {
                errors.insert(rule.field(), message);
            }
        }
        errors
    }

    /// Validate a single field against the rules active for the current topic.
    ///
    /// Returns `None` when the field is valid or is not subject to any rule.
    pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<&'static str> {
        self.active_rules(values.topic())
            .filter(|rule| rule.field() == field)
            .find_map(|rule| rule.check(values.get(field)).err())
    }
}

impl Default for ValidationRuleset {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_RULES: LazyLock<ValidationRuleset> = LazyLock::new(ValidationRuleset::standard);

/// Validate values against the standard survey rules.
pub fn validate(values: &FormValues) -> FormErrors {
    STANDARD_RULES.validate(values)
}
