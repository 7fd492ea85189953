use thiserror::Error;

/// Errors surfaced by the color algebra, scale resolver, and style resolvers.
///
/// None of these are recovered internally. The UI edge decides whether to
/// fall back to a safe value or to halt.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("invalid color format: {input:?}")]
    InvalidColorFormat { input: String },

    #[error("theme is missing `{field}` required by the {schema} schema")]
    MissingThemeField { field: String, schema: &'static str },

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

impl StyleError {
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>, schema: &'static str) -> Self {
        Self::MissingThemeField {
            field: field.into(),
            schema,
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation(message.into())
    }
}

pub type Result<T, E = StyleError> = std::result::Result<T, E>;
