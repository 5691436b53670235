/// Error type for form state operations.
///
/// Validation failures are not errors in this sense; they are reported as
/// [`FormErrors`](crate::FormErrors) data so the UI can render them per field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// An edit event named a field the form does not have.
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl FormError {
    /// The offending field name, if this is an unknown-field error.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::UnknownField(name) => Some(name),
        }
    }
}
