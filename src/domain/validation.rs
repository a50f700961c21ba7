use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    InvalidPattern {
        field: &'static str,
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPattern {
                field,
                pattern,
                reason,
            } => write!(f, "invalid {field} pattern {pattern:?}: {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}
