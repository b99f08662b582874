use publer_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Missing credential token or required workspace scope. Always
    /// batch-fatal, raised before any item is processed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required per-item field is absent or empty. Scoped to the
    /// offending item.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response decode error: {0}")]
    Decode(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed connection configuration (bad base URL, bad JSON shape).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConnectorError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Errors that abort the whole batch regardless of the
    /// continue-on-fail policy.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::InvalidConfig(_))
    }
}

impl From<ConnectorError> for CoreError {
    fn from(err: ConnectorError) -> Self {
        match err {
            ConnectorError::Configuration(msg)
            | ConnectorError::Validation(msg)
            | ConnectorError::InvalidConfig(msg) => CoreError::Invalid(msg),
            ConnectorError::Serialization(e) => CoreError::Serde(e.to_string()),
            other => CoreError::Other(other.to_string()),
        }
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_configuration_errors_are_fatal() {
        assert!(ConnectorError::configuration("no token").is_fatal());
        assert!(ConnectorError::InvalidConfig("bad url".into()).is_fatal());
        assert!(!ConnectorError::validation("missing field").is_fatal());
        assert!(!ConnectorError::Status { status: 500, message: "oops".into() }.is_fatal());
    }

    #[test]
    fn bridges_into_core_error() {
        let core: CoreError = ConnectorError::validation("missing field").into();
        assert!(matches!(core, CoreError::Invalid(_)));

        let core: CoreError = ConnectorError::Status { status: 404, message: "gone".into() }.into();
        assert!(matches!(core, CoreError::Other(_)));
    }
}
