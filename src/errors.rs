//! Error types for the QueryHaus crate
//!
//! This module contains the driver resolution errors and an umbrella error
//! covering everything a QueryHaus call can return.

use thiserror::Error;

/// Driver resolution failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("Driver not found: {0}")]
    NotFound(String),

    #[error("Driver already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Wrong implementation for driver '{name}': expected {expected}")]
    WrongImplementation { name: String, expected: &'static str },
}

#[derive(Error, Debug)]
pub enum QueryHausError {
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("Query logic error: {0}")]
    QueryLogic(#[from] query_core::QueryLogicError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
