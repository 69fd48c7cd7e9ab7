use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("No course table for {institution} department {department}")]
    MissingCourseTable {
        institution: String,
        department: String,
    },

    #[error("Failed to fetch department {department}: {message}")]
    FetchError { department: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Source,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Config,
            Self::MissingCourseTable { .. } | Self::FetchError { .. } => ErrorCategory::Source,
            Self::CsvError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorCategory::Export
            }
        }
    }

    /// 錯誤嚴重程度，決定 CLI 的退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一科系失敗只會讓該科系被略過
            Self::MissingCourseTable { .. } => ErrorSeverity::Low,
            Self::FetchError { .. } => ErrorSeverity::Medium,
            Self::ConfigParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::CsvError(_)
            | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::CsvError(e) => format!("Could not write the CSV export: {}", e),
            Self::SerializationError(e) => format!("Could not write the JSON export: {}", e),
            Self::ConfigParseError { message } => {
                format!("The catalog file is not valid TOML: {}", message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            Self::MissingCourseTable {
                institution,
                department,
            } => format!("{} {} has no course table", institution, department),
            Self::FetchError { department, message } => {
                format!("Fetching {} failed: {}", department, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => "Check the catalog TOML and the command line options",
            ErrorCategory::Source => "Add a course table for the department or remove it from the catalog",
            ErrorCategory::Export => "Make sure the output path exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
