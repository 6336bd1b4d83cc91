//! Cross-cutting error types.
//!
//! Domain-specific errors (dataset loading, configuration) live in their own
//! crates. The analysis itself is infallible; these errors only surface at the
//! edges where untyped input is turned into the types of this crate.

use thiserror::Error;

/// Errors that can be raised by any reef crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup by id returned no result.
    #[error("Not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_name_the_subject() {
        let missing = CoreError::NotFound {
            entity_type: "species trait".to_string(),
            id: "nemo".to_string(),
        };
        assert_eq!(missing.to_string(), "Not found: species trait nemo");
        assert_eq!(
            CoreError::Validation("empty id".to_string()).to_string(),
            "Validation error: empty id"
        );
    }
}
