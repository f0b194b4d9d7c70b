use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootcampError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Plot error: {message}")]
    PlotError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Io,
    Data,
    Configuration,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BootcampError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BootcampError::DivisionByZero | BootcampError::Overflow { .. } => {
                ErrorCategory::Arithmetic
            }
            BootcampError::IoError(_) => ErrorCategory::Io,
            BootcampError::CsvError(_) | BootcampError::SerializationError(_) => {
                ErrorCategory::Data
            }
            BootcampError::ConfigValidationError { .. }
            | BootcampError::InvalidConfigValueError { .. }
            | BootcampError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BootcampError::PlotError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic
            | ErrorCategory::Data
            | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BootcampError::DivisionByZero => "Use a non-zero divisor".to_string(),
            BootcampError::Overflow { .. } => {
                "Use a wider integer type or floating point operands".to_string()
            }
            BootcampError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            BootcampError::CsvError(_) | BootcampError::SerializationError(_) => {
                "Re-run with --verbose to see which series failed to serialize".to_string()
            }
            BootcampError::ConfigValidationError { field, .. }
            | BootcampError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in your configuration", field)
            }
            BootcampError::MissingConfigError { field } => {
                format!("Add '{}' to your configuration", field)
            }
            BootcampError::PlotError { .. } => {
                "Try a smaller order or a narrower x range".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Arithmetic => format!("Arithmetic failed: {}", self),
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Data => format!("Could not write plot data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Rendering => format!("Could not draw the plot: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BootcampError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_is_arithmetic() {
        let err = BootcampError::DivisionByZero;
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_overflow_is_arithmetic() {
        let err = BootcampError::Overflow {
            operation: "add".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.to_string(), "Arithmetic overflow in add");
    }

    #[test]
    fn test_config_error_mentions_field() {
        let err = BootcampError::InvalidConfigValueError {
            field: "grid.points".to_string(),
            value: "1".to_string(),
            reason: "Value must be at least 2".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("grid.points"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: BootcampError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }
}
