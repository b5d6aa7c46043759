//! Query builder utilities
//!
//! This module provides the SQL text driver.

use crate::errors::QueryLogicError;
use crate::query_builder::clause::{ClauseKind, QueryState};
use crate::query_builder::fields::{Conditions, Fields};
use crate::query_builder::pagination::RowBound;
use crate::query_builder::sql_generation::{SqlGenerator, CONDITION_SEPARATOR, FIELD_SEPARATOR};
use crate::query_builder::table_ref::Tables;
use crate::query_builder::validation::StructureValidator;
use crate::traits::SimpleQueryBuilder;
use config::{BuilderConfig, EmptyClausePolicy};
use std::any::Any;

/// Driver producing plain SQL SELECT statements
#[derive(Debug, Clone, Default)]
pub struct SqlQueryDriver {
    state: QueryState,
    policy: EmptyClausePolicy,
}

impl SqlQueryDriver {
    pub const DRIVER_NAME: &'static str = "sql";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: EmptyClausePolicy) -> Self {
        Self {
            state: QueryState::new(),
            policy,
        }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::with_policy(config.empty_clause_policy)
    }

    pub fn policy(&self) -> EmptyClausePolicy {
        self.policy
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    fn store_list(&mut self, kind: ClauseKind, fields: &Fields, separator: &str) {
        self.state
            .set(kind, SqlGenerator::build_list_operand(fields, separator));
    }

    fn validation_failed(&self, err: QueryLogicError) -> QueryLogicError {
        debug_log!("Query validation failed: {}", err);
        err
    }
}

impl SimpleQueryBuilder for SqlQueryDriver {
    fn driver_name(&self) -> &'static str {
        Self::DRIVER_NAME
    }

    fn select(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder {
        self.store_list(ClauseKind::Select, &fields, FIELD_SEPARATOR);
        self
    }

    fn from(&mut self, tables: Tables<'_>) -> Result<&mut dyn SimpleQueryBuilder, QueryLogicError> {
        debug_log!(
            "Expanding FROM list with {} entries ({} sub-queries)",
            tables.len(),
            tables.sub_query_count()
        );
        let operand = SqlGenerator::build_from_operand(tables)?;
        self.state.set(ClauseKind::From, operand);
        Ok(self)
    }

    fn where_(&mut self, conditions: Conditions) -> &mut dyn SimpleQueryBuilder {
        self.store_list(ClauseKind::Where, &conditions, CONDITION_SEPARATOR);
        self
    }

    fn group_by(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder {
        self.store_list(ClauseKind::GroupBy, &fields, FIELD_SEPARATOR);
        self
    }

    fn having(&mut self, conditions: Conditions) -> &mut dyn SimpleQueryBuilder {
        self.store_list(ClauseKind::Having, &conditions, CONDITION_SEPARATOR);
        self
    }

    fn order_by(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder {
        self.store_list(ClauseKind::OrderBy, &fields, FIELD_SEPARATOR);
        self
    }

    fn limit(&mut self, limit: RowBound) -> &mut dyn SimpleQueryBuilder {
        self.state.set(ClauseKind::Limit, limit.as_str());
        self
    }

    fn offset(&mut self, offset: RowBound) -> &mut dyn SimpleQueryBuilder {
        self.state.set(ClauseKind::Offset, offset.as_str());
        self
    }

    fn build(&mut self) -> Result<String, QueryLogicError> {
        StructureValidator::validate_build(&self.state, self.policy)
            .map_err(|err| self.validation_failed(err))?;

        let query = SqlGenerator::prepare_query(
            self.state
                .fragments(self.policy)
                .map(|(_, fragment)| fragment),
        );
        self.reset();

        debug_log!("Built query: {}", query);
        Ok(query)
    }

    fn build_count(&mut self) -> Result<String, QueryLogicError> {
        StructureValidator::validate_count(&self.state, self.policy)
            .map_err(|err| self.validation_failed(err))?;

        let select = self
            .state
            .is_set(ClauseKind::Select, self.policy)
            .then(|| self.state.fragment(ClauseKind::Select))
            .flatten();
        let projection = SqlGenerator::build_count_projection(select);

        // SELECT is first in canonical order, so the projection replaces it in place
        let query = SqlGenerator::prepare_query(
            std::iter::once(projection).chain(
                self.state
                    .fragments(self.policy)
                    .filter(|(kind, _)| *kind != ClauseKind::Select)
                    .map(|(_, fragment)| fragment),
            ),
        );
        self.reset();

        debug_log!("Built count query: {}", query);
        Ok(query)
    }

    fn fragment(&self, kind: ClauseKind) -> Option<String> {
        self.state.fragment(kind)
    }

    fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn reset(&mut self) {
        self.state.clear();
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
