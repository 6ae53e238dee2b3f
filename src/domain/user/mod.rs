//! User aggregate

pub mod model;

pub use model::{NewUser, User};

use super::{Catalog, CatalogMessages};

/// Flat user table; email is unique.
pub struct UserCatalog;

impl Catalog for UserCatalog {
    const NAME: &'static str = "user";

    const MESSAGES: CatalogMessages = CatalogMessages {
        list_failed: "Failed to fetch users",
        create_failed: "Failed to create user",
        conflict: Some("Email already exists"),
        invalid_reference: None,
    };

    type Record = User;
    type Listing = User;
    type Filter = ();
    type Draft = NewUser;
}
