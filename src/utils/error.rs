use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("Invalid BSN format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("No valid BSN found after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ToolsError {
    pub fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidFormat { .. } => ErrorSeverity::Low,
            Self::ApiError(_) | Self::ApiStatus { .. } => ErrorSeverity::Medium,
            Self::CsvError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::GenerationExhausted { .. } | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "Supply at most 9 decimal digits, e.g. 123456782",
            Self::GenerationExhausted { .. } => {
                "Check the random source or raise generator.max_attempts"
            }
            Self::ApiError(_) => "Check the network connection or raise persons.timeout_seconds",
            Self::ApiStatus { status, .. } if *status >= 500 => {
                "The remote API is unavailable, retry later or raise persons.retry_attempts"
            }
            Self::ApiStatus { .. } => "Check persons.endpoint and the requested count",
            Self::CsvError(_) => "The downloaded data is not valid CSV",
            Self::IoError(_) => "Check that the output and logging directories are writable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolsError>;
