//! Application layer - use cases built on the repository ports

pub mod seed;

pub use seed::{seed_demo_data, SeedOutcome, SeedSummary};
