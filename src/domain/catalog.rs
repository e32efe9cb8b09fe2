// src/domain/catalog.rs

use crate::domain::listing::{Listing, CURRENCY, LOCATIONS, PROPERTY_TYPES};

pub const DEFAULT_CATALOG_SIZE: usize = 12;
/// Keeps every derived price and size within `u32`.
pub const MAX_CATALOG_SIZE: u32 = 100_000;

pub const TYPE_CYCLE_LEN: usize = PROPERTY_TYPES.len();
pub const LOCATION_CYCLE_LEN: usize = LOCATIONS.len();

pub const BASE_PRICE: u32 = 5000;
pub const PRICE_STEP: u32 = 500;

pub const BEDS_CYCLE_LEN: u32 = 4;
pub const BATHS_CYCLE_LEN: u32 = 3;

pub const BASE_SQFT: u32 = 800;
pub const SQFT_STEP: u32 = 50;

/// Builds `n` listings as a pure function of their index.
///
/// Types repeat every `TYPE_CYCLE_LEN` items and locations every
/// `LOCATION_CYCLE_LEN`, so e.g. every 4th listing from index 2 is an
/// Apartment and every 3rd from index 0 is in Nairobi. Calling this twice
/// with the same `n` yields the same collection.
///
/// At most `MAX_CATALOG_SIZE` listings are built.
pub fn generate_catalog(n: usize) -> Vec<Listing> {
    let n = u32::try_from(n).map_or(MAX_CATALOG_SIZE, |n| n.min(MAX_CATALOG_SIZE));
    (0..n).map(listing_at).collect()
}

fn listing_at(i: u32) -> Listing {
    let index = i as usize;
    let property_type = PROPERTY_TYPES[index % TYPE_CYCLE_LEN];

    Listing {
        id: i + 1,
        title: property_type.as_str().to_string(),
        price: BASE_PRICE + i * PRICE_STEP,
        currency: CURRENCY.to_string(),
        property_type,
        location: LOCATIONS[index % LOCATION_CYCLE_LEN].to_string(),
        beds: 1 + i % BEDS_CYCLE_LEN,
        baths: 1 + i % BATHS_CYCLE_LEN,
        sqft: BASE_SQFT + i * SQFT_STEP,
    }
}

pub fn find_listing(listings: &[Listing], id: u32) -> Option<&Listing> {
    listings.iter().find(|l| l.id == id)
}
