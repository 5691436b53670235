use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::FieldName;

/// A recognized value of the `surveyTopic` discriminator.
///
/// The raw field value is always kept as a string in [`FormValues`](crate::FormValues);
/// an empty or unrecognized value simply has no `SurveyTopic`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum SurveyTopic {
    Technology,
    Health,
    Education,
}

impl SurveyTopic {
    /// Exact, case-sensitive match of a raw discriminator value.
    pub fn from_value(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// The raw discriminator value for this topic.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Fields that belong to this topic's section of the form.
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            Self::Technology => &[FieldName::FavoriteLanguage, FieldName::YearsOfExperience],
            Self::Health => &[FieldName::ExerciseFrequency, FieldName::DietPreference],
            Self::Education => &[FieldName::HighestQualification, FieldName::FieldOfStudy],
        }
    }
}

impl std::fmt::Display for SurveyTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_is_exact() {
        assert_eq!(
            SurveyTopic::from_value("Technology"),
            Some(SurveyTopic::Technology)
        );
        assert_eq!(SurveyTopic::from_value("technology"), None);
        assert_eq!(SurveyTopic::from_value(" Health"), None);
        assert_eq!(SurveyTopic::from_value(""), None);
    }

    #[test]
    fn topic_sections_do_not_overlap() {
        let tech = SurveyTopic::Technology.fields();
        let health = SurveyTopic::Health.fields();
        let education = SurveyTopic::Education.fields();
        for field in tech {
            assert!(!health.contains(field) && !education.contains(field));
        }
        for field in health {
            assert!(!education.contains(field));
        }
    }
}
