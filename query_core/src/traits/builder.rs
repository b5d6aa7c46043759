//! Trait definitions
//!
//! This module defines the capability contract for query drivers.

use crate::errors::QueryLogicError;
use crate::query_builder::{ClauseKind, Conditions, Fields, RowBound, Tables};
use std::any::Any;
use std::fmt::Debug;

/// Capability contract implemented by every query driver.
///
/// The trait is object safe: the registry hands drivers out as
/// `Box<dyn SimpleQueryBuilder>` and sub-queries are passed to
/// [`SimpleQueryBuilder::from`] as `&mut dyn SimpleQueryBuilder`.
///
/// Mutators overwrite the fragment stored for their clause (last write wins)
/// and return the same builder so calls can be chained. A builder is meant
/// for one logical query at a time and is not synchronized.
///
/// ```rust
/// use query_core::prelude::*;
///
/// let mut driver = SqlQueryDriver::new();
/// let sql = driver
///     .select(["id", "email"].into())
///     .from("users".into())?
///     .where_("active = 1".into())
///     .build()?;
///
/// assert_eq!(sql, "SELECT id, email FROM users WHERE active = 1");
/// # Ok::<(), QueryLogicError>(())
/// ```
pub trait SimpleQueryBuilder: Any + Debug {
    /// Key this driver is registered under
    fn driver_name(&self) -> &'static str;

    /// Set the projection, fields joined with `, `
    fn select(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder;

    /// Set the FROM list.
    ///
    /// Nested builders are built immediately and embedded as
    /// `(<sql>) as t_<n>`, numbered from 1 within this call. A nested build
    /// failure is returned and leaves this builder unchanged.
    fn from(&mut self, tables: Tables<'_>) -> Result<&mut dyn SimpleQueryBuilder, QueryLogicError>;

    /// Set the WHERE conditions, joined with ` AND `
    fn where_(&mut self, conditions: Conditions) -> &mut dyn SimpleQueryBuilder;

    /// Set the GROUP BY fields, joined with `, `
    fn group_by(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder;

    /// Set the HAVING conditions, joined with ` AND `
    fn having(&mut self, conditions: Conditions) -> &mut dyn SimpleQueryBuilder;

    /// Set the ORDER BY fields, joined with `, `
    fn order_by(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder;

    fn limit(&mut self, limit: RowBound) -> &mut dyn SimpleQueryBuilder;

    fn offset(&mut self, offset: RowBound) -> &mut dyn SimpleQueryBuilder;

    /// Validate, serialize and reset.
    ///
    /// Requires SELECT and FROM, and LIMIT whenever OFFSET is set.
    fn build(&mut self) -> Result<String, QueryLogicError>;

    /// Validate, serialize a `COUNT(*)` statement and reset.
    ///
    /// Requires FROM and rejects ORDER BY, LIMIT and OFFSET.
    fn build_count(&mut self) -> Result<String, QueryLogicError>;

    /// Formatted fragment currently stored for `kind`, keyword included
    fn fragment(&self, kind: ClauseKind) -> Option<String>;

    /// True when no clause has been set since construction or the last reset
    fn is_empty(&self) -> bool;

    /// Discard every stored fragment
    fn reset(&mut self);

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}
