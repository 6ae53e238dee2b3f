//! HTTP REST API
//!
//! - `common`: error envelope and extractors
//! - `modules`: per-resource DTOs and handlers, health, metrics, request id
//! - `router`: route table and OpenAPI document

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
