//! Convenience re-exports for common QueryHaus usage
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! let mut builder = resolve("sql").unwrap();
//! let sql = builder.select("id".into()).from("users".into()).unwrap().build().unwrap();
//! assert_eq!(sql, "SELECT id FROM users");
//! ```

// Core QueryHaus components
pub use crate::core::{resolve, DriverConstructor, QueryHaus};
pub use crate::errors::{DriverError, QueryHausError};

// Re-export centralized config
pub use config::{AppConfig, BuilderConfig, ConfigError, EmptyClausePolicy};

// Builder contract, driver and clause arguments
pub use query_core::prelude::*;
