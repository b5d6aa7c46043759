//! Query builder utilities
//!
//! This module provides SELECT statement construction utilities.

pub mod builder;
pub mod clause;
pub mod fields;
pub mod pagination;
pub mod sql_generation;
pub mod table_ref;
pub mod validation;



pub use builder::SqlQueryDriver;
pub use clause::{ClauseKind, QueryState};
pub use fields::{Conditions, Fields};
pub use pagination::RowBound;
pub use table_ref::{TableRef, Tables};
