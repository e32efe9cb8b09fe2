pub mod catalog;
pub mod filter;
pub mod listing;

pub use catalog::{find_listing, generate_catalog, DEFAULT_CATALOG_SIZE};
pub use filter::{filter, FilterCriteria, FilterError};
pub use listing::Listing;
