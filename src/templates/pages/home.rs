// templates/pages/home.rs

use crate::domain::{FilterCriteria, Listing};
use crate::templates::{desktop_layout, filter_form, pages::results_grid};
use maud::{html, Markup};

pub struct HomeVm {
    pub criteria: FilterCriteria,
    pub listings: Vec<Listing>,
    pub liked_ids: Vec<u32>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Find a rental",
        html! {
            main class="container" {
                h1 { "Find your next home" }

                (filter_form(&vm.criteria))

                section id="results" {
                    (results_grid(&vm.listings, &vm.liked_ids))
                }
            }
        },
    )
}
