//! HTTP resource modules

use std::sync::Arc;

use crate::domain::RepositoryProvider;

pub mod booking_accounts;
pub mod departments;
pub mod health;
pub mod metrics;
pub mod projects;
pub mod request_id;
pub mod users;

/// State shared by the four catalog resources
#[derive(Clone)]
pub struct CatalogState {
    pub repos: Arc<dyn RepositoryProvider>,
}
