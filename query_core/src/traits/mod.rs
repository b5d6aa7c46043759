//! Traits for query drivers
//!
//! This module contains the capability contract shared by every query driver.

pub mod builder;

pub use builder::SimpleQueryBuilder;
