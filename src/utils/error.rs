use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurtleError {
    #[error("Invalid argument `{field}` ({value}): {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration validation failed for `{field}`: {message}")]
    ConfigValidation { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Engine,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TurtleError {
    pub fn validation(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Argument,
            Self::Polars(_) => ErrorCategory::Engine,
            Self::Io(_) => ErrorCategory::Io,
            Self::Config { .. } | Self::ConfigValidation { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation { .. } | Self::ConfigValidation { .. } => ErrorSeverity::High,
            Self::Config { .. } => ErrorSeverity::High,
            Self::Polars(_) => ErrorSeverity::Medium,
            Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Check the arguments passed to the expression builder",
            Self::Polars(_) => "Check that the referenced columns exist and have compatible types",
            Self::Io(_) => "Check that the input file exists and the output directory is writable",
            Self::Config { .. } | Self::ConfigValidation { .. } => {
                "Fix the recipe file and run again; use --dry-run to validate it"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation { field, reason, .. } => format!("Invalid `{}`: {}", field, reason),
            Self::Polars(e) => format!("Query failed: {}", e),
            Self::Io(e) => format!("File operation failed: {}", e),
            Self::Config { message } => format!("Bad configuration: {}", message),
            Self::ConfigValidation { field, message } => {
                format!("Bad configuration in `{}`: {}", field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TurtleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = TurtleError::validation("n", 0, "`n` should be positive");
        assert_eq!(
            err.to_string(),
            "Invalid argument `n` (0): `n` should be positive"
        );
        assert_eq!(err.category(), ErrorCategory::Argument);
        assert_eq!(err.user_friendly_message(), "Invalid `n`: `n` should be positive");
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: TurtleError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
