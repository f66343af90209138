use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input stream closed before a value was entered")]
    InputClosed,

    #[error("Invalid number: '{input}'")]
    InvalidNumber { input: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
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
    Input,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CheckInError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckInError::InputClosed | CheckInError::InvalidNumber { .. } => ErrorCategory::Input,
            CheckInError::ConfigError { .. }
            | CheckInError::ConfigValidationError { .. }
            | CheckInError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            CheckInError::IoError(_) | CheckInError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者結束輸入 (Ctrl-D)，視為正常離開
            CheckInError::InputClosed => ErrorSeverity::Low,
            CheckInError::InvalidNumber { .. } => ErrorSeverity::Medium,
            CheckInError::ConfigError { .. }
            | CheckInError::ConfigValidationError { .. }
            | CheckInError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CheckInError::IoError(_) | CheckInError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckInError::InputClosed => "Restart the check-in and enter every requested value",
            CheckInError::InvalidNumber { .. } => {
                "Enter whole numbers for age, days and spaces, and a decimal for the amount due"
            }
            CheckInError::ConfigError { .. } | CheckInError::ConfigValidationError { .. } => {
                "Check that the config file exists and is valid TOML"
            }
            CheckInError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file; capacities must not be negative"
            }
            CheckInError::IoError(_) => "Check that the terminal is readable and writable",
            CheckInError::SerializationError(_) => "Retry without --json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckInError::InputClosed => "Check-in ended before all values were entered".to_string(),
            CheckInError::InvalidNumber { input } => {
                format!("'{}' is not a number, check-in session aborted", input)
            }
            CheckInError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckInError>;
