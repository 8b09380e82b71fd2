use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("{device} does not support {operation}")]
    UnsupportedOperation { device: String, operation: String },

    #[error("Journal entry {index} out of range (journal has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("Unknown principle: {name}")]
    UnknownPrinciple { name: String },

    #[error("No demonstration registered for {principle}")]
    PrincipleNotRegistered { principle: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Domain,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SamplerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SamplerError::IoError(_)
            | SamplerError::FileNotFound { .. }
            | SamplerError::InvalidEncoding { .. } => ErrorCategory::Io,
            SamplerError::UnsupportedOperation { .. } | SamplerError::EntryOutOfRange { .. } => {
                ErrorCategory::Domain
            }
            SamplerError::UnknownPrinciple { .. }
            | SamplerError::PrincipleNotRegistered { .. }
            | SamplerError::ConfigValidationError { .. }
            | SamplerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SamplerError::UnsupportedOperation { .. } => ErrorSeverity::Low,
            SamplerError::FileNotFound { .. } => ErrorSeverity::Medium,
            SamplerError::EntryOutOfRange { .. }
            | SamplerError::InvalidEncoding { .. }
            | SamplerError::UnknownPrinciple { .. }
            | SamplerError::PrincipleNotRegistered { .. }
            | SamplerError::ConfigValidationError { .. }
            | SamplerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SamplerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SamplerError::FileNotFound { path } => {
                format!("Could not open '{}' for writing", path)
            }
            SamplerError::UnsupportedOperation { device, operation } => {
                format!("The {} cannot {}", device, operation)
            }
            SamplerError::UnknownPrinciple { name } => {
                format!("'{}' is not one of the demonstrated principles", name)
            }
            SamplerError::PrincipleNotRegistered { principle } => {
                format!("The {} demonstration was not selected for this run", principle)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Domain => "Use a device or index that supports the requested operation",
            ErrorCategory::Configuration => {
                "Review the configuration file and command line arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SamplerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_is_medium_io_error() {
        let err = SamplerError::FileNotFound {
            path: "missing/test123.txt".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("missing/test123.txt"));
    }

    #[test]
    fn test_unregistered_principle_is_not_reported_as_unknown() {
        let err = SamplerError::PrincipleNotRegistered {
            principle: "open-closed".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.user_friendly_message(),
            "The open-closed demonstration was not selected for this run"
        );
        assert!(!err.user_friendly_message().contains("not one of"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let err = SamplerError::InvalidConfigValueError {
            field: "shapes.probe_width".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for 'shapes.probe_width': Value must be at least 1"
        );
    }
}
