//! Area code value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A JMA area code, e.g. `130000` for Tokyo
///
/// Codes are numeric strings. Which tier a code belongs to (region,
/// prefecture, sub-area) is a property of the mapping it is looked up in,
/// not of the code itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaCode(String);

impl AreaCode {
    /// Create a new area code with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAreaCode` if the code is empty or
    /// contains anything other than ASCII digits.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAreaCode(code));
        }
        Ok(Self(code))
    }

    /// Get the code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AreaCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
