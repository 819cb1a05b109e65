use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API rejected the request: {details}")]
    RemoteRejectionError { details: String },

    #[error("Malformed API response: {message}")]
    ResponseFormatError { message: String },

    #[error("Template format error: {message}")]
    FileFormatError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Remote,
    Response,
    Template,
    FileSystem,
}

impl HeaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HeaderError::ConfigError { .. }
            | HeaderError::MissingConfigError { .. }
            | HeaderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            HeaderError::TransportError(_) => ErrorCategory::Network,
            HeaderError::RemoteRejectionError { .. } => ErrorCategory::Remote,
            HeaderError::ResponseFormatError { .. } => ErrorCategory::Response,
            HeaderError::FileFormatError { .. } => ErrorCategory::Template,
            HeaderError::IoError(_) => ErrorCategory::FileSystem,
        }
    }

    /// 所有錯誤都是致命的，程序以 1 結束
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HeaderError::MissingConfigError { field } => {
                format!("Error: {} must be set", field)
            }
            HeaderError::TransportError(e) if e.is_timeout() => {
                "Error: the GitHub API did not answer in time".to_string()
            }
            HeaderError::TransportError(_) => {
                "Error: could not reach the GitHub API".to_string()
            }
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set GITHUB_REPOSITORY_OWNER (or USERNAME) and GITHUB_TOKEN before running"
            }
            ErrorCategory::Network => "Check network connectivity and run again",
            ErrorCategory::Remote => "Check that the token is valid and the user exists",
            ErrorCategory::Response => "The API answered with unexpected data; run again later",
            ErrorCategory::Template => {
                "Make sure the template still contains the contribution grid markers"
            }
            ErrorCategory::FileSystem => "Check that the template file exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, HeaderError>;
