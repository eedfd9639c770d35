//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Area code is not a non-empty numeric string
    #[error("Invalid area code: {0:?}")]
    InvalidAreaCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_area_code_message() {
        let err = DomainError::InvalidAreaCode("13a000".to_string());
        assert_eq!(err.to_string(), "Invalid area code: \"13a000\"");
    }
}
