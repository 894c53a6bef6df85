use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;

use crate::config::RunConfig;
use crate::core::constants::defaults;
use crate::core::error::{HtmlValidatorError, Result};
use crate::core::types::{Format, Report, Source, ValidationRequest, ValidationResponse};
use crate::validation::classifier::strip_ignored_lines;

/// One call to a markup validation service per request
#[async_trait]
pub trait Validate {
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationResponse>;
}

/// Client for services speaking the Nu HTML Checker protocol
#[derive(Debug, Clone)]
pub struct HttpValidator {
    client: reqwest::Client,
    ignore: Option<String>,
}

impl HttpValidator {
    pub fn new(config: &RunConfig) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
            ignore: config.ignore.clone(),
        })
    }

    fn build_request(&self, request: &ValidationRequest) -> reqwest::RequestBuilder {
        let endpoint = request
            .validator
            .as_deref()
            .unwrap_or(defaults::VALIDATOR_URL);
        let out = request.format.as_str();

        let mut builder = match &request.source {
            Source::Url(url) => {
                debug!("GET {endpoint} doc={url} out={out}");
                self.client
                    .get(endpoint)
                    .query(&[("doc", url.as_str()), ("out", out)])
            }
            Source::Data(bytes) | Source::File {
                contents: bytes, ..
            } => {
                debug!("POST {endpoint} ({} bytes) out={out}", bytes.len());
                self.client
                    .post(endpoint)
                    .query(&[("out", out)])
                    .header(CONTENT_TYPE, defaults::CONTENT_TYPE)
                    .body(bytes.clone())
            }
        };

        if let Some(ref headers) = request.headers {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        builder
    }
}

#[async_trait]
impl Validate for HttpValidator {
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationResponse> {
        if request.source.is_empty() {
            return Err(HtmlValidatorError::InvalidArgument(
                "refusing to submit an empty document".to_string(),
            ));
        }

        let response = self
            .build_request(request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        debug!("validator answered with {} bytes", body.len());

        match request.format {
            Format::Json => Ok(ValidationResponse::Json(serde_json::from_slice::<Report>(
                &body,
            )?)),
            Format::Text => {
                let text = String::from_utf8_lossy(&body).into_owned();
                Ok(ValidationResponse::Text(match self.ignore.as_deref() {
                    Some(ignore) => strip_ignored_lines(&text, ignore),
                    None => text,
                }))
            }
        }
    }
}
