use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("File not found: {path}")]
    CatalogNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid line format: expected at least 2 fields, found {fields}")]
    InvalidLineFormat { fields: usize },

    #[error("Invalid line format: missing course number")]
    MissingCourseNumber,

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Io,
    Parse,
    Config,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::CatalogNotFound { .. } => ErrorCategory::Catalog,
            PlannerError::IoError(_) => ErrorCategory::Io,
            PlannerError::InvalidLineFormat { .. } | PlannerError::MissingCourseNumber => {
                ErrorCategory::Parse
            }
            PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// Short message suitable for printing straight to the console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::CatalogNotFound { .. } => "File not found".to_string(),
            PlannerError::IoError(e) => format!("Could not read file: {}", e),
            PlannerError::InvalidLineFormat { .. } | PlannerError::MissingCourseNumber => {
                "Invalid line format".to_string()
            }
            PlannerError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            PlannerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Catalog => {
                "Check that the catalog file exists or pass another one with --catalog"
            }
            ErrorCategory::Io => "Check the file permissions and try loading again",
            ErrorCategory::Parse => {
                "Each line needs at least a course number and a name separated by a comma"
            }
            ErrorCategory::Config => "Fix the configuration file or command line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
