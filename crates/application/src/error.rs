//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Upstream weather service failure
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Persistence failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_message() {
        let err = ApplicationError::ExternalService("connection refused".to_string());
        assert_eq!(err.to_string(), "External service error: connection refused");
    }

    #[test]
    fn storage_message() {
        let err = ApplicationError::Storage("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}
