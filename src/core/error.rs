use std::fmt;

/// Error types for html-validator operations
#[derive(Debug)]
pub enum HtmlValidatorError {
    /// IO error (reading files, resolving the working directory)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error, including non-success responses from the validator
    Http(reqwest::Error),

    /// Malformed JSON, either from the validator or from `--headers`
    Json(serde_json::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// File walking error
    FileWalking(ignore::Error),
}

impl fmt::Display for HtmlValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlValidatorError::Io(err) => write!(f, "IO error: {err}"),
            HtmlValidatorError::Config(msg) => write!(f, "Configuration error: {msg}"),
            HtmlValidatorError::Http(err) => write!(f, "HTTP error: {err}"),
            HtmlValidatorError::Json(err) => write!(f, "JSON error: {err}"),
            HtmlValidatorError::FileNotFound(path) => write!(f, "File not found: {path}"),
            HtmlValidatorError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            HtmlValidatorError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for HtmlValidatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HtmlValidatorError::Io(err) => Some(err),
            HtmlValidatorError::Http(err) => Some(err),
            HtmlValidatorError::Json(err) => Some(err),
            HtmlValidatorError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl HtmlValidatorError {
    /// Transport errors end a single target; everything else ends the run.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            HtmlValidatorError::Http(_) | HtmlValidatorError::Json(_)
        )
    }
}

impl From<std::io::Error> for HtmlValidatorError {
    fn from(err: std::io::Error) -> Self {
        HtmlValidatorError::Io(err)
    }
}

impl From<reqwest::Error> for HtmlValidatorError {
    fn from(err: reqwest::Error) -> Self {
        HtmlValidatorError::Http(err)
    }
}

impl From<serde_json::Error> for HtmlValidatorError {
    fn from(err: serde_json::Error) -> Self {
        HtmlValidatorError::Json(err)
    }
}

impl From<ignore::Error> for HtmlValidatorError {
    fn from(err: ignore::Error) -> Self {
        HtmlValidatorError::FileWalking(err)
    }
}

/// Type alias for Results using HtmlValidatorError
pub type Result<T> = std::result::Result<T, HtmlValidatorError>;
