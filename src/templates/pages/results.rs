use crate::domain::Listing;
use crate::templates::listing_card;
use maud::{html, Markup};

/// The filtered grid, swapped into `#results` on every filter change.
pub fn results_grid(listings: &[Listing], liked_ids: &[u32]) -> Markup {
    html! {
        p class="result-count" {
            "Showing " strong { (listings.len()) } " listings"
        }

        @if listings.is_empty() {
            p class="empty" { "No listings match your search." }
        } @else {
            div class="listing-grid" {
                @for listing in listings {
                    (listing_card(listing, liked_ids.contains(&listing.id)))
                }
            }
        }
    }
}
