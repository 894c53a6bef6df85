use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::constants::{exit_policies, markers, messages, output_formats};
use crate::core::error::HtmlValidatorError;

/// Report format requested from the validator service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => output_formats::TEXT,
            Format::Json => output_formats::JSON,
        }
    }
}

impl FromStr for Format {
    type Err = HtmlValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            output_formats::TEXT => Ok(Format::Text),
            output_formats::JSON => Ok(Format::Json),
            other => Err(HtmlValidatorError::Config(format!(
                "Unknown format '{other}'. Expected one of: {}",
                output_formats::ALL.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the outcomes of several targets are folded into one exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Fail when any target fails
    #[default]
    Any,
    /// Only the last processed target counts
    Last,
}

impl FromStr for ExitPolicy {
    type Err = HtmlValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            exit_policies::ANY => Ok(ExitPolicy::Any),
            exit_policies::LAST => Ok(ExitPolicy::Last),
            other => Err(HtmlValidatorError::Config(format!(
                "Unknown exit policy '{other}'. Expected one of: {}",
                exit_policies::ALL.join(", ")
            ))),
        }
    }
}

/// The document handed to the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Markup given directly on the command line
    Data(Vec<u8>),
    /// Contents of a local file
    File { path: PathBuf, contents: Vec<u8> },
    /// Document the service fetches itself
    Url(String),
}

impl Source {
    /// Bytes to post, `None` for URL sources
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Source::Data(data) => Some(data),
            Source::File { contents, .. } => Some(contents),
            Source::Url(_) => None,
        }
    }

    /// Zero-length markup is never submitted to the service
    pub fn is_empty(&self) -> bool {
        self.bytes().is_some_and(<[u8]>::is_empty)
    }
}

/// A single call to the validator service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub source: Source,
    pub format: Format,
    /// Overrides the default validator endpoint
    pub validator: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
}

impl ValidationRequest {
    pub fn new(source: Source, format: Format) -> Self {
        Self {
            source,
            format,
            validator: None,
            headers: None,
        }
    }

    pub fn with_validator(mut self, validator: Option<String>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_headers(mut self, headers: Option<BTreeMap<String, String>>) -> Self {
        self.headers = headers;
        self
    }
}

/// One entry of a structured report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Location, extract and other fields are passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Message {
    pub fn new(kind: &str, message: &str) -> Self {
        Self {
            kind: kind.to_string(),
            message: Some(message.to_string()),
            extra: serde_json::Map::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == markers::ERROR_TYPE
    }

    pub fn is_non_document_error(&self) -> bool {
        self.kind == markers::NON_DOCUMENT_ERROR_TYPE
    }
}

/// Structured report returned for `out=json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Report {
    pub fn errors(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_error())
    }

    pub fn non_document_errors(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_non_document_error())
    }
}

/// Raw answer of the validator service
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResponse {
    Json(Report),
    Text(String),
}

/// Classification of a single target's validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
    DocumentNotFound,
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Valid)
    }

    /// Short line printed under the banner
    pub fn summary(&self) -> &'static str {
        match self {
            Outcome::Valid => messages::VALID,
            Outcome::Invalid => messages::NOT_VALID,
            Outcome::DocumentNotFound => messages::NOT_FOUND,
        }
    }
}

/// What kind of thing a target is, used for its banner label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Url,
    Data,
}

impl TargetKind {
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::File | TargetKind::Data => "file",
            TargetKind::Url => "url",
        }
    }
}

/// A resolved target, ready to be turned into a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    /// Name shown in the banner, forward slashes only
    pub display: String,
}

impl Target {
    pub fn file(display: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::File,
            display: display.into(),
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Url,
            display: url.into(),
        }
    }

    pub fn data() -> Self {
        Self {
            kind: TargetKind::Data,
            display: messages::INLINE_DATA.to_string(),
        }
    }

    pub fn banner(&self) -> String {
        format!("Validated {}: {}", self.kind.label(), self.display)
    }
}
