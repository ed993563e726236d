//! BuntuBuild HTTP server.
//!
//! Thin axum layer over the domain services in `buntubuild-core`: request
//! parsing, auth, and status mapping live here; every rule about money,
//! milestones, and plans lives in core.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;

pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};
