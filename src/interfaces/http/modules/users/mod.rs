//! Users module: flat user list and creation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
