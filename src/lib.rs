//! # Time Booking Service
//!
//! Record management for a time-booking system: users, departments,
//! projects and the booking accounts time is logged against, served as a
//! JSON REST API with an OpenAPI document.
//!
//! ## Architecture
//!
//! - **domain**: entities, creation drafts with their validation rules, the
//!   catalog repository port and domain errors
//! - **application**: use cases on top of the ports (demo data seeding)
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: axum router, DTOs, handlers and OpenAPI document
//! - **server**: runtime bootstrap and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use infrastructure::{init_database, run_migrations, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::{create_api_router, ApiDoc};
