//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Outbound REST clients and their retry policy (rest_client, retry)
//! - Reference-table cache (cache)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod cache;
pub mod config;
pub mod rest_client;
pub mod retry;
pub mod server;
pub mod state;

pub use state::AppState;
