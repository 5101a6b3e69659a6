use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("IO error: {path}: file is empty")]
    EmptyFile { path: String },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("JSON decode error: {message}")]
    DecodeError { message: String },

    #[error("Invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Invalid filter '{expression}': {reason}")]
    InvalidFilter { expression: String, reason: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) | EtlError::EmptyFile { .. } => ErrorCategory::Io,
            EtlError::MalformedRecord { .. }
            | EtlError::DecodeError { .. }
            | EtlError::InvalidRecord { .. } => ErrorCategory::Data,
            EtlError::UnsupportedFormat { .. }
            | EtlError::InvalidFilter { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorCategory::Config,
        }
    }

    /// Process exit code for the CLI: 2 for usage/config problems, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            ErrorCategory::Io | ErrorCategory::Data => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(_) => "Check that the file exists and that you have permission to access it",
            EtlError::EmptyFile { .. } => "Provide a CSV file with a header row followed by records",
            EtlError::MalformedRecord { .. } => {
                "Each CSV row needs name, population and area columns with integer values"
            }
            EtlError::DecodeError { .. } => {
                "The JSON file must be an array of {\"Name\", \"Population\", \"Area\"} objects"
            }
            EtlError::InvalidRecord { .. } => {
                "Fix the record or rerun with --no-validate to skip record validation"
            }
            EtlError::UnsupportedFormat { .. } => "Use a file ending in .csv or .json",
            EtlError::InvalidFilter { .. } => {
                "Use field=value with field one of name, population, area"
            }
            EtlError::MissingConfigError { .. } => "Pass the value on the command line or in the config file",
            EtlError::InvalidConfigValueError { .. } | EtlError::ConfigValidationError { .. } => {
                "Review the configuration values and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("Could not access file: {}", e),
            EtlError::EmptyFile { path } => format!("Input file '{}' is empty", path),
            EtlError::MalformedRecord { line, reason } => {
                format!("Line {} of the CSV input is invalid: {}", line, reason)
            }
            EtlError::DecodeError { message } => format!("JSON input could not be read: {}", message),
            EtlError::InvalidRecord { index, reason } => {
                format!("Record {} of the JSON input is invalid: {}", index, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
