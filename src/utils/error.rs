use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Executable not found: {program}")]
    ToolNotFound { program: String },
}

impl SuiteError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SuiteError::HttpError(_) => "Could not reach the API".to_string(),
            SuiteError::IoError(e) => format!("File system error: {}", e),
            SuiteError::SerializationError(_) => "Could not write the JSON report".to_string(),
            SuiteError::ConfigParseError { .. } => "The configuration file is not valid TOML".to_string(),
            SuiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SuiteError::ToolNotFound { program } => format!("'{}' is not installed", program),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SuiteError::HttpError(_) => "Check the base URL and your network connection",
            SuiteError::IoError(_) => "Check that the path exists and is writable",
            SuiteError::SerializationError(_) => "Retry without --report",
            SuiteError::ConfigParseError { .. } => "Fix the TOML syntax of the configuration file",
            SuiteError::InvalidConfigValueError { .. } => "Correct the value in the config file or on the command line",
            SuiteError::ToolNotFound { .. } => "Install the tool and make sure it is on PATH",
        }
    }
}

pub type Result<T> = std::result::Result<T, SuiteError>;
