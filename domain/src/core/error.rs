//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Objective must not be empty")]
    EmptyObjective,

    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("Unknown worker kind: {0}")]
    UnknownWorkerKind(String),

    #[error("Unknown route category: {0}")]
    UnknownRouteCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::UnknownWorkerKind("plumber".to_string());
        assert_eq!(error.to_string(), "Unknown worker kind: plumber");
        assert_eq!(
            DomainError::EmptyObjective.to_string(),
            "Objective must not be empty"
        );
    }
}
