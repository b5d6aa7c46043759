//! Query builder utilities
//!
//! This module provides SQL fragment construction utilities.

use crate::errors::QueryLogicError;
use crate::query_builder::clause::ClauseKind;
use crate::query_builder::fields::Fields;
use crate::query_builder::table_ref::{TableRef, Tables};

pub const FIELD_SEPARATOR: &str = ", ";
pub const CONDITION_SEPARATOR: &str = " AND ";
pub const SUB_QUERY_ALIAS_PREFIX: &str = "t_";
const COUNT_PROJECTION: &str = "COUNT(*)";

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build a list operand (SELECT, GROUP BY, ORDER BY fields or
    /// WHERE, HAVING conditions)
    pub fn build_list_operand(fields: &Fields, separator: &str) -> String {
        fields.join(separator)
    }

    /// Build the FROM operand, expanding nested builders.
    ///
    /// Each sub-query is built in place and aliased `t_1`, `t_2`, ... in
    /// argument order. Literal entries do not consume an alias number and
    /// numbering starts over on every call.
    pub fn build_from_operand(tables: Tables<'_>) -> Result<String, QueryLogicError> {
        let mut sub_query_counter = 1;
        let mut entries = Vec::new();

        for table in tables {
            match table {
                TableRef::Literal(name) => entries.push(name),
                TableRef::SubQuery(builder) => {
                    let sql = builder.build()?;
                    trace_log!("Expanded sub-query {}: {}", sub_query_counter, sql);
                    entries.push(format!(
                        "({}) as {}{}",
                        sql, SUB_QUERY_ALIAS_PREFIX, sub_query_counter
                    ));
                    sub_query_counter += 1;
                }
            }
        }

        Ok(entries.join(FIELD_SEPARATOR))
    }

    /// Build the projection of a count query from the current SELECT
    /// fragment, if any
    pub fn build_count_projection(select_fragment: Option<String>) -> String {
        match select_fragment {
            Some(fragment) => format!("{}{}{}", fragment, FIELD_SEPARATOR, COUNT_PROJECTION),
            None => format!("{} {}", ClauseKind::Select.keyword(), COUNT_PROJECTION),
        }
    }

    /// Join fragments, already in canonical order, into one statement
    pub fn prepare_query<I>(fragments: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        fragments
            .into_iter()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}
