use thiserror::Error;

/// Main error type for Rummage operations
#[derive(Error, Debug)]
pub enum RummageError {
    #[error("Index capacity exceeded: all {capacity} slots are allocated")]
    CapacityExceeded { capacity: usize },

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Rummage operations
pub type Result<T> = std::result::Result<T, RummageError>;

impl RummageError {
    /// Check if this error was caused by the caller's input rather than service state
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RummageError::InvalidPattern { .. }
                | RummageError::InvalidRequest(_)
                | RummageError::IndexNotFound(_)
        )
    }

    /// Stable tag used in API error bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            RummageError::CapacityExceeded { .. } => "capacity_exceeded",
            RummageError::IndexNotFound(_) => "index_not_found",
            RummageError::InvalidPattern { .. } => "invalid_pattern",
            RummageError::InvalidRequest(_) => "invalid_request",
            RummageError::InvalidLocale(_) => "invalid_locale",
            RummageError::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RummageError::CapacityExceeded { capacity: 32 };
        assert_eq!(
            err.to_string(),
            "Index capacity exceeded: all 32 slots are allocated"
        );

        let err = RummageError::IndexNotFound("books".to_string());
        assert_eq!(err.to_string(), "Index not found: books");
    }

    #[test]
    fn test_client_errors() {
        assert!(RummageError::InvalidRequest("empty id".to_string()).is_client_error());
        assert!(RummageError::IndexNotFound("x".to_string()).is_client_error());
        assert!(!RummageError::CapacityExceeded { capacity: 1 }.is_client_error());
        assert!(!RummageError::Internal("boom".to_string()).is_client_error());
        // A bad locale is a startup configuration problem
        assert!(!RummageError::InvalidLocale("xx!".to_string()).is_client_error());
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = RummageError::InvalidPattern {
            field: "title".to_string(),
            source,
        };
        assert_eq!(err.error_type(), "invalid_pattern");
        assert!(err.to_string().starts_with("Invalid pattern for field 'title'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
