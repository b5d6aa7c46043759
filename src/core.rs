//! Core QueryHaus functionality
//!
//! This module contains the driver registry, which resolves a driver key to a
//! fresh builder implementing the [`SimpleQueryBuilder`] contract.

use std::any::type_name;
use std::collections::HashMap;

use config::{AppConfig, BuilderConfig};
use query_core::{SimpleQueryBuilder, SqlQueryDriver};

use crate::errors::{DriverError, QueryHausError};

/// Constructor stored in the registry for one driver key
pub type DriverConstructor = fn(&BuilderConfig) -> Box<dyn SimpleQueryBuilder>;

/// Driver registry and builder factory.
///
/// The built-in SQL driver is registered under [`SqlQueryDriver::DRIVER_NAME`].
/// Every resolution constructs a new builder, so one builder per logical
/// query is the expected usage.
pub struct QueryHaus {
    config: BuilderConfig,
    drivers: HashMap<String, DriverConstructor>,
}

fn sql_driver(config: &BuilderConfig) -> Box<dyn SimpleQueryBuilder> {
    Box::new(SqlQueryDriver::from_config(config))
}

impl QueryHaus {
    /// Create a registry with the built-in drivers registered
    pub fn new(config: BuilderConfig) -> Self {
        let mut drivers: HashMap<String, DriverConstructor> = HashMap::new();
        drivers.insert(SqlQueryDriver::DRIVER_NAME.to_string(), sql_driver);

        Self { config, drivers }
    }

    /// Create a registry from a loaded application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(config.builder.clone())
    }

    /// Create a registry from `queryhaus.toml` (or the file named by
    /// `QUERYHAUS_CONFIG`)
    pub fn load() -> Result<Self, QueryHausError> {
        let config = AppConfig::load()?;
        Ok(Self::from_app_config(&config))
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Register a driver constructor under a given name
    pub fn register_driver(
        &mut self,
        name: impl Into<String>,
        constructor: DriverConstructor,
    ) -> Result<(), DriverError> {
        let name = name.into();
        if self.drivers.contains_key(&name) {
            return Err(DriverError::AlreadyRegistered(name));
        }

        debug_log!("Registering query driver '{}'", name);
        self.drivers.insert(name, constructor);
        Ok(())
    }

    /// Resolve a driver by name into a new builder
    pub fn get(&self, name: &str) -> Result<Box<dyn SimpleQueryBuilder>, DriverError> {
        let constructor = self
            .drivers
            .get(name)
            .ok_or_else(|| DriverError::NotFound(name.to_string()))?;

        trace_log!("Resolved query driver '{}'", name);
        Ok(constructor(&self.config))
    }

    /// Resolve a driver by name and check that it is implemented by `T`
    pub fn get_as<T>(&self, name: &str) -> Result<Box<T>, DriverError>
    where
        T: SimpleQueryBuilder,
    {
        self.get(name)?
            .into_any()
            .downcast::<T>()
            .map_err(|_| DriverError::WrongImplementation {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// Resolve the driver named by `default_driver` in the configuration
    pub fn default_driver(&self) -> Result<Box<dyn SimpleQueryBuilder>, DriverError> {
        self.get(&self.config.default_driver)
    }

    pub fn has_driver(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// List all registered driver names
    pub fn list_drivers(&self) -> Vec<&String> {
        self.drivers.keys().collect()
    }

    /// Remove a driver by name
    pub fn unregister_driver(&mut self, name: &str) -> Result<(), DriverError> {
        self.drivers
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DriverError::NotFound(name.to_string()))
    }
}

impl Default for QueryHaus {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

/// Resolve a driver identifier against the default registry
pub fn resolve(identifier: &str) -> Result<Box<dyn SimpleQueryBuilder>, DriverError> {
    QueryHaus::default().get(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::EmptyClausePolicy;
    use query_core::{
        ClauseKind, Conditions, Fields, QueryLogicError, RowBound, Tables,
    };
    use std::any::Any;

    /// Driver that wraps every statement in an EXPLAIN, used to exercise
    /// registration of a second implementation
    #[derive(Debug, Default)]
    struct ExplainDriver {
        inner: SqlQueryDriver,
    }

    impl SimpleQueryBuilder for ExplainDriver {
        fn driver_name(&self) -> &'static str {
            "explain"
        }

        fn select(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder {
            self.inner.select(fields);
            self
        }

        fn from(
            &mut self,
            tables: Tables<'_>,
        ) -> Result<&mut dyn SimpleQueryBuilder, QueryLogicError> {
            self.inner.from(tables)?;
            Ok(self)
        }

        fn where_(&mut self, conditions: Conditions) -> &mut dyn SimpleQueryBuilder {
            self.inner.where_(conditions);
            self
        }

        fn group_by(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder {
            self.inner.group_by(fields);
            self
        }

        fn having(&mut self, conditions: Conditions) -> &mut dyn SimpleQueryBuilder {
            self.inner.having(conditions);
            self
        }

        fn order_by(&mut self, fields: Fields) -> &mut dyn SimpleQueryBuilder {
            self.inner.order_by(fields);
            self
        }

        fn limit(&mut self, limit: RowBound) -> &mut dyn SimpleQueryBuilder {
            self.inner.limit(limit);
            self
        }

        fn offset(&mut self, offset: RowBound) -> &mut dyn SimpleQueryBuilder {
            self.inner.offset(offset);
            self
        }

        fn build(&mut self) -> Result<String, QueryLogicError> {
            Ok(format!("EXPLAIN {}", self.inner.build()?))
        }

        fn build_count(&mut self) -> Result<String, QueryLogicError> {
            Ok(format!("EXPLAIN {}", self.inner.build_count()?))
        }

        fn fragment(&self, kind: ClauseKind) -> Option<String> {
            self.inner.fragment(kind)
        }

        fn is_empty(&self) -> bool {
            self.inner.is_empty()
        }

        fn reset(&mut self) {
            self.inner.reset();
        }

        fn into_any(self: Box<Self>) -> Box<dyn Any> {
            self
        }
    }

    fn explain_driver(_config: &BuilderConfig) -> Box<dyn SimpleQueryBuilder> {
        Box::new(ExplainDriver::default())
    }

    #[test]
    fn test_sql_driver_registered_by_default() {
        let queryhaus = QueryHaus::default();

        assert!(queryhaus.has_driver("sql"));
        assert_eq!(queryhaus.list_drivers(), vec!["sql"]);

        let builder = queryhaus.get("sql").unwrap();
        assert_eq!(builder.driver_name(), "sql");
        assert!(builder.is_empty());
    }

    #[test]
    fn test_unknown_driver() {
        let queryhaus = QueryHaus::default();

        let err = queryhaus.get("unknown").unwrap_err();
        assert_eq!(err, DriverError::NotFound("unknown".to_string()));
        assert_eq!(err.to_string(), "Driver not found: unknown");
    }

    #[test]
    fn test_register_and_resolve_custom_driver() {
        let mut queryhaus = QueryHaus::default();
        queryhaus.register_driver("explain", explain_driver).unwrap();

        let mut builder = queryhaus.get("explain").unwrap();
        let sql = builder
            .select("id".into())
            .from("users".into())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(sql, "EXPLAIN SELECT id FROM users");
    }

    #[test]
    fn test_register_duplicate_driver() {
        let mut queryhaus = QueryHaus::default();

        assert_eq!(
            queryhaus.register_driver("sql", explain_driver),
            Err(DriverError::AlreadyRegistered("sql".to_string()))
        );
        // The original constructor stays in place
        assert_eq!(queryhaus.get("sql").unwrap().driver_name(), "sql");
    }

    #[test]
    fn test_get_as_checks_implementation() {
        let mut queryhaus = QueryHaus::default();
        queryhaus.register_driver("explain", explain_driver).unwrap();

        assert!(queryhaus.get_as::<SqlQueryDriver>("sql").is_ok());
        assert!(queryhaus.get_as::<ExplainDriver>("explain").is_ok());

        let err = queryhaus.get_as::<SqlQueryDriver>("explain").unwrap_err();
        assert!(matches!(
            err,
            DriverError::WrongImplementation { ref name, .. } if name == "explain"
        ));

        assert!(matches!(
            queryhaus.get_as::<SqlQueryDriver>("missing"),
            Err(DriverError::NotFound(_))
        ));
    }

    #[test]
    fn test_unregister_driver() {
        let mut queryhaus = QueryHaus::default();

        queryhaus.unregister_driver("sql").unwrap();
        assert!(!queryhaus.has_driver("sql"));
        assert_eq!(
            queryhaus.unregister_driver("sql"),
            Err(DriverError::NotFound("sql".to_string()))
        );
    }

    #[test]
    fn test_config_reaches_driver() {
        let config = BuilderConfig::default()
            .with_empty_clause_policy(EmptyClausePolicy::KeywordOnlyIsUnset);
        let queryhaus = QueryHaus::new(config);

        let driver = queryhaus.get_as::<SqlQueryDriver>("sql").unwrap();
        assert_eq!(driver.policy(), EmptyClausePolicy::KeywordOnlyIsUnset);
    }

    #[test]
    fn test_default_driver_follows_config() {
        let mut queryhaus = QueryHaus::new(BuilderConfig::new(
            "explain".to_string(),
            EmptyClausePolicy::default(),
        ));
        assert!(matches!(
            queryhaus.default_driver(),
            Err(DriverError::NotFound(_))
        ));

        queryhaus.register_driver("explain", explain_driver).unwrap();
        assert_eq!(queryhaus.default_driver().unwrap().driver_name(), "explain");
    }

    #[test]
    fn test_each_resolution_is_a_fresh_builder() {
        let queryhaus = QueryHaus::default();

        let mut first = queryhaus.get("sql").unwrap();
        first.select("id".into());

        let second = queryhaus.get("sql").unwrap();
        assert!(second.is_empty());
        assert!(!first.is_empty());
    }
}
