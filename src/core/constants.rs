/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Literal markers exchanged with the validator service live here together
/// with the defaults used when neither the CLI nor a config file sets a value.
/// Output format constants, sent to the service as the `out` parameter
pub mod output_formats {
    /// Plain text report
    pub const TEXT: &str = "text";
    /// Structured report with a `messages` array
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Exit code aggregation policies for runs with several targets
pub mod exit_policies {
    /// Any failing target fails the run
    pub const ANY: &str = "any";
    /// Only the last processed target decides the exit code
    pub const LAST: &str = "last";

    pub const DEFAULT: &str = ANY;

    pub const ALL: [&str; 2] = [ANY, LAST];
}

/// Default configuration values
pub mod defaults {
    /// Public W3C Nu HTML Checker
    pub const VALIDATOR_URL: &str = "https://validator.w3.org/nu/";
    /// Extension of files picked up in batch mode
    pub const FILE_EXTENSION: &str = "html";
    /// Directories containing this marker are never descended into
    pub const EXCLUDED_DIR: &str = "node_modules";
    /// Content type used when posting markup
    pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".htmlvalidator.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_PARENT_LEVELS: usize = 3;
}

/// Markers the validator service puts in its responses
pub mod markers {
    /// Message type for markup errors
    pub const ERROR_TYPE: &str = "error";
    /// Message type for documents that could not be fetched or parsed
    pub const NON_DOCUMENT_ERROR_TYPE: &str = "non-document-error";
    /// Summary line of a text report with errors
    pub const TEXT_ERRORS: &str = "There were errors";
    /// Checked instead of `TEXT_ERRORS` once ignored lines were removed
    pub const TEXT_ERROR_IGNORE_MODE: &str = "Error";
}

/// Messages printed per target
pub mod messages {
    pub const VALID: &str = "Page is valid";
    pub const NOT_VALID: &str = "Page is not valid";
    pub const NOT_FOUND: &str = "Page not found";
    pub const EMPTY_FILE: &str = "Skipping empty file";
    pub const INLINE_DATA: &str = "<inline data>";
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats() {
        assert_eq!(output_formats::DEFAULT, output_formats::TEXT);
        assert!(output_formats::ALL.contains(&output_formats::JSON));
    }

    #[test]
    fn test_exit_policies() {
        assert_eq!(exit_policies::DEFAULT, exit_policies::ANY);
        assert_eq!(exit_policies::ALL.len(), 2);
    }

    #[test]
    fn test_markers_are_case_sensitive_literals() {
        assert!(!markers::TEXT_ERRORS.contains(markers::TEXT_ERROR_IGNORE_MODE));
        assert_ne!(markers::ERROR_TYPE, markers::NON_DOCUMENT_ERROR_TYPE);
    }

    #[test]
    fn test_defaults() {
        assert!(defaults::VALIDATOR_URL.starts_with("https://"));
        assert!(!defaults::FILE_EXTENSION.starts_with('.'));
    }
}
