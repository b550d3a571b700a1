//! Database layer - connection pool, schema, seed data and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no global connection handle
//! - Pool is injected into repositories at construction
//! - Single-row parameterized statements, no transactions

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::PostRepo;
