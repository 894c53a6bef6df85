//! Turns validator responses into outcomes and printable reports

use memchr::memmem;

use crate::core::constants::markers;
use crate::core::error::Result;
use crate::core::types::{Message, Outcome, ValidationResponse};

/// Classify a response.
///
/// Text reports are matched by substring: `non-document-error` wins over
/// `There were errors`. In ignore mode the ignored lines are already gone
/// and any remaining `Error` marks the page invalid.
pub fn classify(response: &ValidationResponse, ignore_mode: bool) -> Outcome {
    match response {
        ValidationResponse::Json(report) => {
            if report.non_document_errors().next().is_some() {
                Outcome::DocumentNotFound
            } else if report.errors().next().is_some() {
                Outcome::Invalid
            } else {
                Outcome::Valid
            }
        }
        ValidationResponse::Text(text) => {
            let invalid_marker = if ignore_mode {
                markers::TEXT_ERROR_IGNORE_MODE
            } else {
                markers::TEXT_ERRORS
            };

            if contains(text, markers::NON_DOCUMENT_ERROR_TYPE) {
                Outcome::DocumentNotFound
            } else if contains(text, invalid_marker) {
                Outcome::Invalid
            } else {
                Outcome::Valid
            }
        }
    }
}

/// The report printed for a target.
///
/// With `quiet` set, a failing JSON report is narrowed to its error messages.
pub fn render_body(response: &ValidationResponse, outcome: Outcome, quiet: bool) -> Result<String> {
    match response {
        ValidationResponse::Text(text) => Ok(text.clone()),
        ValidationResponse::Json(report) if quiet && outcome.is_failure() => {
            let errors: Vec<&Message> = report.errors().collect();
            Ok(serde_json::to_string_pretty(&errors)?)
        }
        ValidationResponse::Json(report) => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Remove every line containing `ignore`. An empty string removes nothing.
pub fn strip_ignored_lines(text: &str, ignore: &str) -> String {
    if ignore.is_empty() {
        return text.to_string();
    }
    text.split_inclusive('\n')
        .filter(|line| !contains(line, ignore))
        .collect()
}

fn contains(haystack: &str, needle: &str) -> bool {
    memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::types::Report;

    fn report(kinds: &[&str]) -> ValidationResponse {
        ValidationResponse::Json(Report {
            messages: kinds
                .iter()
                .enumerate()
                .map(|(i, kind)| Message::new(kind, &format!("message {i}")))
                .collect(),
            ..Default::default()
        })
    }

    #[test]
    fn test_classify__json_valid() {
        assert_eq!(classify(&report(&[]), false), Outcome::Valid);
        assert_eq!(classify(&report(&["info"]), false), Outcome::Valid);
    }

    #[test]
    fn test_classify__json_invalid() {
        assert_eq!(classify(&report(&["info", "error"]), false), Outcome::Invalid);
    }

    #[test]
    fn test_classify__json_non_document_error_wins() {
        assert_eq!(
            classify(&report(&["error", "non-document-error", "error"]), false),
            Outcome::DocumentNotFound
        );
    }

    #[test]
    fn test_classify__text_valid() {
        let text = ValidationResponse::Text(
            "The document validates according to the specified schema(s).\n".into(),
        );
        assert_eq!(classify(&text, false), Outcome::Valid);
    }

    #[test]
    fn test_classify__text_invalid() {
        let text = ValidationResponse::Text("Error: Stray end tag.\nThere were errors.\n".into());
        assert_eq!(classify(&text, false), Outcome::Invalid);
    }

    #[test]
    fn test_classify__text_non_document_error_wins() {
        let text = ValidationResponse::Text(
            "non-document-error: io\nThere were errors.\n".into(),
        );
        assert_eq!(classify(&text, false), Outcome::DocumentNotFound);
        assert_eq!(classify(&text, true), Outcome::DocumentNotFound);
    }

    #[test]
    fn test_classify__text_ignore_mode_uses_error_marker() {
        let only_summary = ValidationResponse::Text("There were errors.\n".into());
        assert_eq!(classify(&only_summary, true), Outcome::Valid);

        let remaining_error = ValidationResponse::Text("Error: Stray end tag.\n".into());
        assert_eq!(classify(&remaining_error, true), Outcome::Invalid);
        assert_eq!(classify(&remaining_error, false), Outcome::Valid);
    }

    #[test]
    fn test_classify__text_is_case_sensitive() {
        let text = ValidationResponse::Text("there were errors".into());
        assert_eq!(classify(&text, false), Outcome::Valid);
    }

    #[test]
    fn test_render_body__text_is_verbatim() -> Result<()> {
        let text = ValidationResponse::Text("There were errors.\n".into());
        assert_eq!(render_body(&text, Outcome::Invalid, true)?, "There were errors.\n");
        Ok(())
    }

    #[test]
    fn test_render_body__json_full_report() -> Result<()> {
        let response = report(&["info", "error"]);

        let body = render_body(&response, Outcome::Invalid, false)?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        assert_eq!(value["messages"].as_array().unwrap().len(), 2);
        assert!(body.contains("\n  \"messages\""));
        Ok(())
    }

    #[test]
    fn test_render_body__quiet_failure_narrows_to_errors() -> Result<()> {
        let response = report(&["info", "error", "non-document-error", "error"]);

        let body = render_body(&response, Outcome::DocumentNotFound, true)?;
        let messages: Vec<Message> = serde_json::from_str(&body)?;

        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(Message::is_error));
        Ok(())
    }

    #[test]
    fn test_render_body__quiet_valid_keeps_full_report() -> Result<()> {
        let response = report(&["info"]);

        let body = render_body(&response, Outcome::Valid, true)?;

        assert!(body.contains("\"messages\""));
        Ok(())
    }

    #[test]
    fn test_strip_ignored_lines() {
        let text = "Error: A\nError: B lang\nThere were errors.";

        assert_eq!(
            strip_ignored_lines(text, "lang"),
            "Error: A\nThere were errors."
        );
        assert_eq!(strip_ignored_lines(text, ""), text);
        assert_eq!(strip_ignored_lines(text, "Error"), "There were errors.");
    }
}
