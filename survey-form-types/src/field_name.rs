use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::FormError;

/// One of the fixed fields of the survey form.
///
/// The canonical wire name of each field is its camelCase key, e.g. `"fullName"`.
/// Variants are declared in form order, so ordered maps keyed by `FieldName`
/// iterate top to bottom.
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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    /// The topic discriminator.
    SurveyTopic,
    FavoriteLanguage,
    YearsOfExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
    Feedback,
}

impl FieldName {
    /// Parse a wire name such as `"yearsOfExperience"`.
    pub fn parse(name: &str) -> Result<Self, FormError> {
        name.parse()
            .map_err(|_| FormError::UnknownField(name.to_string()))
    }

    /// The camelCase wire name.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// All fields, in form order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Human-readable label shown next to the field and in the confirmation view.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::SurveyTopic => "Survey Topic",
            Self::FavoriteLanguage => "Favorite Programming Language",
            Self::YearsOfExperience => "Years of Experience",
            Self::ExerciseFrequency => "Exercise Frequency",
            Self::DietPreference => "Diet Preference",
            Self::HighestQualification => "Highest Qualification",
            Self::FieldOfStudy => "Field of Study",
            Self::Feedback => "Feedback",
        }
    }

    /// Options offered by a select-style field.
    ///
    /// Empty for free-text fields. Validation only checks presence, so these
    /// are a rendering hint rather than a constraint.
    pub fn choices(self) -> &'static [&'static str] {
        match self {
            Self::SurveyTopic => &["Technology", "Health", "Education"],
            Self::FavoriteLanguage => &["JavaScript", "Python", "Java", "C#"],
            Self::ExerciseFrequency => &["Daily", "Weekly", "Monthly", "Rarely"],
            Self::DietPreference => &["Vegetarian", "Vegan", "Non-Vegetarian"],
            Self::HighestQualification => &["High School", "Bachelor's", "Master's", "PhD"],
            Self::FullName
            | Self::Email
            | Self::YearsOfExperience
            | Self::FieldOfStudy
            | Self::Feedback => &[],
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(FieldName::FullName.as_str(), "fullName");
        assert_eq!(FieldName::YearsOfExperience.as_str(), "yearsOfExperience");
        assert_eq!(FieldName::FieldOfStudy.to_string(), "fieldOfStudy");
    }

    #[test]
    fn parse_round_trips_every_field() {
        for field in FieldName::all() {
            assert_eq!(FieldName::parse(field.as_str()).unwrap(), field);
        }
        assert_eq!(FieldName::all().count(), 10);
    }

    #[test]
    fn parse_rejects_unknown_and_differently_cased_names() {
        assert_eq!(
            FieldName::parse("nickname"),
            Err(FormError::UnknownField("nickname".into()))
        );
        assert!(FieldName::parse("FullName").is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&FieldName::DietPreference).unwrap();
        assert_eq!(json, "\"dietPreference\"");
    }
}
