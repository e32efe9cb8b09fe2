use crate::domain::filter::{FilterCriteria, PRICE_BUCKETS};
use crate::domain::listing::{Listing, PROPERTY_TYPES};
use maud::{html, Markup};

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn listing_card(listing: &Listing, liked: bool) -> Markup {
    card(
        &listing.title,
        html! {
            p class="location" { (listing.location) }
            p class="price" { strong { (listing.display_price()) } " / month" }
            ul class="specs" {
                li { (listing.beds) " beds" }
                li { (listing.baths) " baths" }
                li { (listing.sqft) " sqft" }
            }
            a href=(format!("/listings/{}", listing.id)) class="details" { "View details" }
            (like_button(listing, liked))
        },
    )
}

pub fn like_button(listing: &Listing, liked: bool) -> Markup {
    html! {
        form method="post" action=(format!("/likes/{}", listing.id)) {
            @if liked {
                button type="submit" class="btn like liked" aria-pressed="true" { "♥ Liked" }
            } @else {
                button type="submit" class="btn like" aria-pressed="false" { "♡ Like" }
            }
        }
    }
}

pub fn filter_form(criteria: &FilterCriteria) -> Markup {
    let selected_type = criteria.property_type.map(|t| t.as_str()).unwrap_or("");
    let selected_price = criteria.price_range.token();

    html! {
        form
            method="get"
            action="/listings"
            class="filters"
            hx-get="/listings/results"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-push-url="true"
            hx-trigger="input changed delay:300ms from:input, change from:select"
        {
            label for="location" class="sr-only" { "Location" }
            input
                type="text"
                id="location"
                name="location"
                placeholder="Search by location"
                value=(criteria.location);

            label for="type" class="sr-only" { "Property type" }
            select id="type" name="type" {
                option value="" selected[selected_type.is_empty()] { "All types" }
                @for t in PROPERTY_TYPES {
                    option value=(t.as_str()) selected[selected_type == t.as_str()] { (t.as_str()) }
                }
            }

            label for="price" class="sr-only" { "Price range" }
            select id="price" name="price" {
                @for (label, token) in PRICE_BUCKETS {
                    option value=(token) selected[selected_price == token] { (label) }
                }
            }

            (button("Search"))

            @if !criteria.is_empty() {
                a href="/" class="clear-filters" { "Clear filters" }
            }
        }
    }
}
