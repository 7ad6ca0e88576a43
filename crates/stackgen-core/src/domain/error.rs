use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid value for {field}: port must be non-zero")]
    InvalidPort { field: &'static str },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} contains a line break, which would corrupt the generated env file")]
    UnsafeValue { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPort { field } => vec![
                format!("Supply a port between 1 and 65535 for {field}"),
                "The database default is 27017, the HTTP default is 8080".into(),
            ],
            Self::EmptyField { field } => vec![
                format!("Supply a non-empty value for {field}"),
                "Omit the flag entirely to use the sample default".into(),
            ],
            Self::UnsafeValue { field } => vec![
                format!("Remove line breaks from {field}"),
                "Values are written verbatim as KEY=VALUE lines".into(),
            ],
        }
    }
}
