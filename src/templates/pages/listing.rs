use crate::domain::Listing;
use crate::templates::{desktop_layout, like_button};
use maud::{html, Markup};

pub fn listing_page(listing: &Listing, liked: bool) -> Markup {
    desktop_layout(
        &listing.title,
        html! {
            main class="container narrow" {
                a href="/" class="back" { "Back to Listings" }

                article class="card listing-detail" {
                    h1 { (listing.title) }
                    p class="price" { strong { (listing.display_price()) } " / month" }
                    p class="location" { (listing.location) }

                    dl class="specs" {
                        dt { "Type" } dd { (listing.property_type) }
                        dt { "Bedrooms" } dd { (listing.beds) }
                        dt { "Bathrooms" } dd { (listing.baths) }
                        dt { "Size" } dd { (listing.sqft) " sqft" }
                    }

                    (like_button(listing, liked))
                }
            }
        },
    )
}
