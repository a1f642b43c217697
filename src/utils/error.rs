use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Record source '{location}' is unavailable: {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("Record source '{location}' is malformed: {message}")]
    SourceFormat { location: String, message: String },

    #[error("Unsupported record source '{location}': {reason}")]
    UnsupportedSource { location: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown route '{route}'")]
    RouteError { route: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Format,
    Configuration,
    Routing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::SourceUnavailable { .. } => ErrorCategory::Source,
            Self::CsvError(_) | Self::SerializationError(_) | Self::SourceFormat { .. } => {
                ErrorCategory::Format
            }
            Self::UnsupportedSource { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::RouteError { .. } => ErrorCategory::Routing,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Routing => ErrorSeverity::Low,
            ErrorCategory::Source => ErrorSeverity::Medium,
            ErrorCategory::Format | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Startup errors stop the catalog from being built; the process must not serve queries.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::RouteError { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Source => {
                "Check that the record source is reachable and returns a successful response"
            }
            ErrorCategory::Format => {
                "Check that the record document is valid JSON, CSV or XML with name/departments fields"
            }
            ErrorCategory::Configuration => {
                "Review the command line flags and the TOML configuration file"
            }
            ErrorCategory::Routing => {
                "Use /rest/employees, /rest/employees?department=<name> or /rest/employees/groupby/department"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read the employee records: {}", e),
            Self::HttpError(e) => format!("Could not download the employee records: {}", e),
            Self::SourceUnavailable { location, .. } => {
                format!("The employee record source '{}' could not be loaded", location)
            }
            Self::CsvError(_) | Self::SerializationError(_) | Self::SourceFormat { .. } => {
                "The employee record document is not in a supported format".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
