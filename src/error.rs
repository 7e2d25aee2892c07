use std::fmt;

/// Custom error type for provider operations
#[derive(Debug)]
pub enum ProviderError {
    /// HTTP request failed before a response was received
    Http {
        context: String,
        source: reqwest::Error,
    },
    /// API returned an error response
    Api { status: u16, message: String },
    /// API reported that the entity does not exist
    NotFound { resource: String, message: String },
    /// Configuration value failed schema validation
    Validation { attribute: String, message: String },
    /// Provider settings error
    Config(String),
    /// JSON/YAML parsing error
    Json(String),
    /// Failed to read or write the state file
    State(String),
}

impl ProviderError {
    /// Whether this error means the remote entity is gone
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }

    /// Prefix the error with the operation it happened in
    pub fn context(self, context: &str) -> Self {
        match self {
            ProviderError::Http { context: inner, source } => ProviderError::Http {
                context: format!("{}: {}", context, inner),
                source,
            },
            ProviderError::Api { status, message } => ProviderError::Api {
                status,
                message: format!("{}: {}", context, message),
            },
            ProviderError::NotFound { resource, message } => ProviderError::NotFound {
                resource,
                message: format!("{}: {}", context, message),
            },
            other => other,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http { context, source } => {
                write!(f, "{}: HTTP request failed: {}", context, source)
            }
            ProviderError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ProviderError::NotFound { resource, message } => {
                write!(f, "{} not found: {}", resource, message)
            }
            ProviderError::Validation { attribute, message } => {
                write!(f, "Invalid value for '{}': {}", attribute, message)
            }
            ProviderError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ProviderError::Json(msg) => write!(f, "JSON error: {}", msg),
            ProviderError::State(msg) => write!(f, "State error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http {
            context: "request".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for ProviderError {
    fn from(err: serde_yml::Error) -> Self {
        ProviderError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::State(err.to_string())
    }
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
