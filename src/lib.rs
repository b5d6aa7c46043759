//! # QueryHaus
//!
//! A lightweight fluent builder for SQL SELECT statements with pluggable
//! drivers, nested sub-queries and structural validation.
//!
//! Fragments are inserted verbatim: escaping and parameter binding are the
//! caller's responsibility.
//!
//! ## Quick Start
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! fn main() -> Result<(), QueryHausError> {
//!     let queryhaus = QueryHaus::default();
//!
//!     let mut recent = queryhaus.get("sql")?;
//!     recent
//!         .select("post_id".into())
//!         .from("comments".into())?
//!         .where_("created_at > '2024-01-01'".into());
//!
//!     let mut builder = queryhaus.get("sql")?;
//!     let sql = builder
//!         .select(["title", "author"].into())
//!         .from(vec!["posts".into(), TableRef::sub_query(recent.as_mut())].into())?
//!         .order_by("title".into())
//!         .limit(10u32.into())
//!         .build()?;
//!
//!     assert_eq!(
//!         sql,
//!         "SELECT title, author FROM posts, (SELECT post_id FROM comments WHERE created_at > '2024-01-01') as t_1 ORDER BY title LIMIT 10"
//!     );
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::{resolve, DriverConstructor, QueryHaus};
pub use errors::{DriverError, QueryHausError};

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, EmptyClausePolicy};

// Re-export internal crates used by the public API
pub use config;
pub use query_core;
