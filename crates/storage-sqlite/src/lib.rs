//! SQLite storage implementation for BuntuBuild.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `buntubuild-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate in the application where Diesel dependencies
//! exist; `core` and the server are database-agnostic and work with traits.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod escrow;
pub mod goals;
pub mod profiles;
pub mod roles;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from buntubuild-core for convenience
pub use buntubuild_core::errors::{DatabaseError, Error, Result};
