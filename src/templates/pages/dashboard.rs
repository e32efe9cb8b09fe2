use crate::domain::Listing;
use crate::templates::{card, desktop_layout, listing_card};
use maud::{html, Markup};

pub struct DashboardVm {
    pub liked: Vec<Listing>,
    /// Every snapshot ever written, including ones for unliked listings.
    pub snapshot_count: usize,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        html! {
            main class="container" {
                h1 { "Dashboard" }

                (card("Activity", html! {
                    p { "Liked listings: " strong { (vm.liked.len()) } }
                    p { "Likes recorded: " strong { (vm.snapshot_count) } }
                }))

                section class="liked" {
                    h3 { "Your liked listings" }
                    @if vm.liked.is_empty() {
                        p { "You haven't liked any listings yet. " a href="/" { "Browse listings" } }
                    } @else {
                        div class="listing-grid" {
                            @for listing in &vm.liked {
                                (listing_card(listing, true))
                            }
                        }
                    }
                }
            }
        },
    )
}
