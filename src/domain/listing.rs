use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Place names listings cycle through, in catalog order.
pub const LOCATIONS: [&str; 3] = ["Kibera, Nairobi", "Kitengela, Kajiado", "Mlolongo, Machakos"];

/// Prices are whole Kenyan shillings.
pub const CURRENCY: &str = "Ksh";

/// Property types listings cycle through, in catalog order.
pub const PROPERTY_TYPES: [PropertyType; 4] = [
    PropertyType::Bedsitter,
    PropertyType::Singles,
    PropertyType::Apartment,
    PropertyType::Condo,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Bedsitter,
    Singles,
    Apartment,
    Condo,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Bedsitter => "Bedsitter",
            PropertyType::Singles => "Singles",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the display name.
impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PROPERTY_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    // Same text as the property type; the catalog has no separate titles.
    pub title: String,
    pub price: u32,
    pub currency: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub location: String,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
}

impl Listing {
    /// Price as shown on cards, e.g. `Ksh6000`.
    pub fn display_price(&self) -> String {
        format!("{}{}", self.currency, self.price)
    }
}
