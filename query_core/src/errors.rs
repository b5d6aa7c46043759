use crate::query_builder::ClauseKind;
use thiserror::Error;

/// Structural problems detected by `build`/`build_count` before serialization.
///
/// The builder state is left untouched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryLogicError {
    #[error("Missing clause: {clause}")]
    MissingClause { clause: ClauseKind },

    #[error("Missing clause: LIMIT (required when OFFSET is set)")]
    OffsetWithoutLimit,

    #[error("Unexpected clause for count query: {clause}")]
    ExtraClause { clause: ClauseKind },
}

impl QueryLogicError {
    pub fn missing(clause: ClauseKind) -> Self {
        Self::MissingClause { clause }
    }

    pub fn extra(clause: ClauseKind) -> Self {
        Self::ExtraClause { clause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueryLogicError::missing(ClauseKind::Select).to_string(),
            "Missing clause: SELECT"
        );
        assert_eq!(
            QueryLogicError::extra(ClauseKind::OrderBy).to_string(),
            "Unexpected clause for count query: ORDER BY"
        );
        assert_eq!(
            QueryLogicError::OffsetWithoutLimit.to_string(),
            "Missing clause: LIMIT (required when OFFSET is set)"
        );
    }
}
