// src/domain/filter.rs

use crate::domain::listing::{Listing, PropertyType};
use thiserror::Error;

/// Options offered by the price dropdown: (label, token).
pub const PRICE_BUCKETS: [(&str, &str); 5] = [
    ("Price Range", ""),
    ("Under 1000", "0-1000"),
    ("1000 - 2000", "1000-2000"),
    ("2000 - 3000", "2000-3000"),
    ("3000+", "3000+"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid price range token: {0:?}")]
    InvalidFilterToken(String),
    #[error("unknown property type: {0:?}")]
    UnknownPropertyType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    Any,
    /// Inclusive on both ends.
    Bounded { min: u32, max: u32 },
    Unbounded { min: u32 },
}

impl PriceRange {
    /// Parses a bucket token: `""`, `"min-max"` or `"N+"`.
    pub fn parse(token: &str) -> Result<Self, FilterError> {
        let token = token.trim();
        let invalid = || FilterError::InvalidFilterToken(token.to_string());

        if token.is_empty() {
            return Ok(PriceRange::Any);
        }

        if let Some(min) = token.strip_suffix('+') {
            let min = parse_amount(min).ok_or_else(invalid)?;
            return Ok(PriceRange::Unbounded { min });
        }

        let (min, max) = token.split_once('-').ok_or_else(invalid)?;
        let min = parse_amount(min).ok_or_else(invalid)?;
        let max = parse_amount(max).ok_or_else(invalid)?;
        if min > max {
            return Err(invalid());
        }

        Ok(PriceRange::Bounded { min, max })
    }

    pub fn contains(&self, price: u32) -> bool {
        match *self {
            PriceRange::Any => true,
            PriceRange::Bounded { min, max } => (min..=max).contains(&price),
            PriceRange::Unbounded { min } => price >= min,
        }
    }

    /// The dropdown token this range was parsed from.
    pub fn token(&self) -> String {
        match *self {
            PriceRange::Any => String::new(),
            PriceRange::Bounded { min, max } => format!("{min}-{max}"),
            PriceRange::Unbounded { min } => format!("{min}+"),
        }
    }
}

/// Digits only; `u32::from_str` alone would also take a leading `+`.
fn parse_amount(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub location: String,
    pub property_type: Option<PropertyType>,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Builds criteria from raw form values. Empty strings are wildcards.
    pub fn from_raw(
        location: &str,
        property_type: &str,
        price_range: &str,
    ) -> Result<Self, FilterError> {
        let property_type = match property_type {
            "" => None,
            raw => Some(
                raw.parse::<PropertyType>()
                    .map_err(|_| FilterError::UnknownPropertyType(raw.to_string()))?,
            ),
        };

        Ok(Self {
            location: location.to_string(),
            property_type,
            price_range: PriceRange::parse(price_range)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_empty()
            && self.property_type.is_none()
            && self.price_range == PriceRange::Any
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_location(listing)
            && self.matches_type(listing)
            && self.price_range.contains(listing.price)
    }

    fn matches_location(&self, listing: &Listing) -> bool {
        self.location.is_empty()
            || listing
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
    }

    fn matches_type(&self, listing: &Listing) -> bool {
        self.property_type
            .map_or(true, |t| t == listing.property_type)
    }
}

/// Returns the listings matching every criterion, in their original order.
pub fn filter(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| criteria.matches(l))
        .cloned()
        .collect()
}
