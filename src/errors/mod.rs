use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum MarketplaceError {
    // Configuration errors
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Network/API errors
    #[error("network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    #[error("parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Validation errors
    #[error("validation error for field '{field}': value '{value}' violates '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    #[error("system error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl MarketplaceError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(ToString::to_string),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { status_code, .. } => match status_code {
                Some(code) => *code >= 500 || *code == 429,
                None => true,
            },
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } | Self::ParseError { .. } | Self::SystemError { .. } => false,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } | Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and TOML syntax")
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {operation}: {reason}");
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check the categories endpoint and your connection");
                msg
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'");
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Logs technical details and prints the user-facing message.
    pub fn handle_error(error: &MarketplaceError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

/// Extension trait for Result to attach the operation that failed
pub trait ResultExt<T> {
    fn with_operation(self, operation: &str) -> MarketplaceResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<MarketplaceError>,
{
    fn with_operation(self, operation: &str) -> MarketplaceResult<T> {
        self.map_err(|e| {
            let error: MarketplaceError = e.into();
            match error {
                MarketplaceError::SystemError { reason, .. } => MarketplaceError::SystemError {
                    operation: operation.to_string(),
                    reason,
                },
                MarketplaceError::NetworkError { url, status_code, reason, .. } => MarketplaceError::NetworkError {
                    operation: operation.to_string(),
                    url,
                    status_code,
                    reason,
                },
                other => other,
            }
        })
    }
}

impl From<std::io::Error> for MarketplaceError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for MarketplaceError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for MarketplaceError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for MarketplaceError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_recoverable_but_client_errors_are_not() {
        let server = MarketplaceError::network_error("fetch", Some("http://x"), Some(503), "unavailable");
        let client = MarketplaceError::network_error("fetch", Some("http://x"), Some(404), "not found");
        let transport = MarketplaceError::network_error("fetch", None, None, "connection refused");

        assert!(server.is_recoverable());
        assert!(!client.is_recoverable());
        assert!(transport.is_recoverable());
    }

    #[test]
    fn user_message_includes_url_and_status() {
        let error = MarketplaceError::network_error("fetch categories", Some("http://host/c"), Some(500), "boom");
        let message = error.user_message();

        assert!(message.contains("fetch categories"));
        assert!(message.contains("http://host/c"));
        assert!(message.contains("500"));
    }

    #[test]
    fn with_operation_renames_system_errors() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let error = result.with_operation("read apps").unwrap_err();

        assert!(matches!(error, MarketplaceError::SystemError { ref operation, .. } if operation == "read apps"));
        assert_eq!(error.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn configuration_error_message_carries_field_and_suggestion() {
        let error = MarketplaceError::config_error("bad url", Some("categories_url"), Some("use https"));

        assert_eq!(error.to_string(), "configuration error: bad url");
        assert!(error.user_message().contains("(field: categories_url)"));
        assert!(error.user_message().contains("use https"));
    }
}
