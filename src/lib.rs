pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod services;

pub use infrastructure::config;
pub use infrastructure::server;
