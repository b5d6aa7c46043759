//! Validation module
//!
//! Structural checks run by `build` and `build_count` before anything is
//! serialized or reset.

use crate::errors::QueryLogicError;
use crate::query_builder::clause::{ClauseKind, QueryState};
use config::EmptyClausePolicy;

pub struct StructureValidator;

impl StructureValidator {
    /// SELECT and FROM are required, OFFSET needs LIMIT
    pub fn validate_build(
        state: &QueryState,
        policy: EmptyClausePolicy,
    ) -> Result<(), QueryLogicError> {
        for required in [ClauseKind::Select, ClauseKind::From] {
            if !state.is_set(required, policy) {
                return Err(QueryLogicError::missing(required));
            }
        }

        if state.is_set(ClauseKind::Offset, policy) && !state.is_set(ClauseKind::Limit, policy) {
            return Err(QueryLogicError::OffsetWithoutLimit);
        }

        Ok(())
    }

    /// ORDER BY, LIMIT and OFFSET are rejected, FROM is required
    pub fn validate_count(
        state: &QueryState,
        policy: EmptyClausePolicy,
    ) -> Result<(), QueryLogicError> {
        for forbidden in [ClauseKind::OrderBy, ClauseKind::Limit, ClauseKind::Offset] {
            if state.is_set(forbidden, policy) {
                return Err(QueryLogicError::extra(forbidden));
            }
        }

        if !state.is_set(ClauseKind::From, policy) {
            return Err(QueryLogicError::missing(ClauseKind::From));
        }

        Ok(())
    }
}
