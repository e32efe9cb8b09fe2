pub mod dashboard;
pub mod home;
pub mod listing;
pub mod results;

pub use dashboard::{dashboard_page, DashboardVm};
pub use home::{home_page, HomeVm};
pub use listing::listing_page;
pub use results::results_grid;
