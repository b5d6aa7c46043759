//! Convenience re-exports for common query-core usage

// Core trait
pub use crate::traits::SimpleQueryBuilder;

// Error types
pub use crate::errors::QueryLogicError;

// Built-in driver
pub use crate::query_builder::SqlQueryDriver;

// Clause arguments and state
pub use crate::query_builder::{
    ClauseKind, Conditions, Fields, QueryState, RowBound, TableRef, Tables,
};

pub use config::EmptyClausePolicy;
