//! Query Core - the SELECT builder contract and its SQL driver for QueryHaus
//!
//! This crate provides the capability contract every query driver implements,
//! the SQL text driver, clause storage, sub-query expansion and the structural
//! validation run before a statement is serialized.
//!
//! Fragments are inserted verbatim. Escaping and parameter binding are the
//! caller's responsibility.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod query_builder;
pub mod traits;

pub use config::EmptyClausePolicy;
pub use errors::QueryLogicError;
pub use query_builder::{
    ClauseKind, Conditions, Fields, QueryState, RowBound, SqlQueryDriver, TableRef, Tables,
};
pub use traits::SimpleQueryBuilder;
