//! Error types for the session storage seam.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures talking to the session-scoped key/value store.
///
/// None of these are fatal: the controller logs them and keeps the
/// countdown running in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to remove `{key}`: {reason}")]
    Remove { key: String, reason: String },
}

/// Flatten a thrown JS value (usually a `DOMException`) into a readable string.
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_error_names_key_and_reason() {
        let err = StorageError::Write {
            key: "countdownTimer".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write `countdownTimer`: QuotaExceededError"
        );
    }

    #[test]
    fn unavailable_message() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "session storage is not available"
        );
    }
}
