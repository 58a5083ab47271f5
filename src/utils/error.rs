use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SampleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SampleError::IoError(_) => ErrorCategory::Io,
            SampleError::TomlParseError(_)
            | SampleError::ConfigError { .. }
            | SampleError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SampleError::IoError(_) => ErrorSeverity::Critical,
            SampleError::TomlParseError(_) | SampleError::ConfigError { .. } => ErrorSeverity::High,
            SampleError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    /// Exit code the binary reports for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SampleError::IoError(e) => format!("Could not read a required file: {}", e),
            SampleError::TomlParseError(e) => format!("The config file is not valid TOML: {}", e),
            SampleError::ConfigError { message } => format!("Configuration problem: {}", message),
            SampleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SampleError::IoError(_) => "Check that the file exists and is readable",
            SampleError::TomlParseError(_) => "Fix the syntax of the config file",
            SampleError::ConfigError { .. } => "Review the [logging] and [run] sections",
            SampleError::InvalidConfigValueError { .. } => "Pass a different value on the command line",
        }
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
