//! Booking account aggregate

pub mod model;

pub use model::{BookingAccount, BookingAccountFilter, BookingAccountListing, NewBookingAccount};

use super::{Catalog, CatalogMessages};

/// Booking accounts belong to a project and list with project and
/// department names joined in.
pub struct BookingAccountCatalog;

impl Catalog for BookingAccountCatalog {
    const NAME: &'static str = "booking account";

    const MESSAGES: CatalogMessages = CatalogMessages {
        list_failed: "Failed to fetch booking accounts",
        create_failed: "Failed to create booking account",
        conflict: None,
        invalid_reference: Some("Invalid project ID"),
    };

    type Record = BookingAccount;
    type Listing = BookingAccountListing;
    type Filter = BookingAccountFilter;
    type Draft = NewBookingAccount;
}
