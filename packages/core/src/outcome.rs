//! The success/data/error envelope consumed by presentation code.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Uniform outcome of a client operation.
///
/// `data` is present iff `success`, `error` is present iff not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Outcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Convert back into a `Result`, with the error message as the error.
    pub fn into_result(self) -> Result<Option<T>, String> {
        match self.error {
            Some(error) if !self.success => Err(error),
            _ => Ok(self.data),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::err(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn failure_serializes_null_data() {
        let outcome: Outcome<u32> = Err::<u32, _>("boom").into();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "data": null, "error": "boom"})
        );
    }

    #[test]
    fn success_carries_data_only() {
        let outcome = Outcome::from(Ok::<_, String>(7));
        assert!(outcome.success);
        assert_eq!(outcome.data, Some(7));
        assert_eq!(outcome.error, None);
        assert_eq!(outcome.into_result(), Ok(Some(7)));
    }
}
