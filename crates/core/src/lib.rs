//! Domain logic for BuntuBuild, a savings tracker for home-construction
//! escrow accounts.
//!
//! This crate is database-agnostic: every domain module exposes a service
//! plus repository traits, and the SQLite implementations live in
//! `buntubuild-storage-sqlite`.

pub mod constants;
pub mod currency;
pub mod errors;
pub mod escrow;
pub mod goals;
pub mod planning;
pub mod profiles;
pub mod roles;
pub mod transactions;

pub use errors::{Error, Result};
