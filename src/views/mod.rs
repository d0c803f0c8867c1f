//! Read-side projections over the collection.
//!
//! The free functions in each module are pure: they take a card slice and
//! return borrowed subsets in collection order, never sorting. The view
//! structs are lightweight wrappers that borrow a
//! [`CollectionController`](crate::controller::CollectionController) and feed
//! it through those functions.

pub mod admin;
pub mod catalog;
pub mod showcase;
pub mod timeline;

pub use admin::{admin_preview, AdminPanel, AdminPreview};
pub use catalog::{featured, filtered_grid, price_series, CatalogView};
pub use showcase::ShowcaseCursor;
pub use timeline::{by_era, timeline, EraBucket, TimelineView};
