use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to decode DoH response: {0}")]
    Decode(String),

    #[error("DoH request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("DoH server {endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Transport-level failures, as opposed to payload or input errors.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::HttpStatus { .. } | Self::QueryTimeout
        )
    }
}
