use crate::db::Database;
use crate::domain::{filter, find_listing, generate_catalog, FilterCriteria, Listing};
use crate::errors::ServerError;
use crate::likes::LikedListings;
use crate::responses::{css_response, html_response, redirect_response, ResultResp};
use crate::storage::SqliteStore;
use crate::templates::pages::{
    dashboard_page, home_page, listing_page, results_grid, DashboardVm, HomeVm,
};
use astra::Request;
use std::collections::HashMap;
use url::Url;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Shared by every request: the session catalog and the likes database.
pub struct AppState {
    pub catalog: Vec<Listing>,
    pub db: Database,
}

impl AppState {
    pub fn new(catalog_size: usize, db: Database) -> Self {
        Self {
            catalog: generate_catalog(catalog_size),
            db,
        }
    }

    fn likes(&self) -> LikedListings<SqliteStore> {
        LikedListings::new(SqliteStore::new(self.db.clone()))
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") | ("GET", "/listings") => {
            let criteria = criteria_from_query(&req)?;
            let vm = HomeVm {
                listings: filter(&state.catalog, &criteria),
                liked_ids: state.likes().liked_ids()?,
                criteria,
            };
            html_response(home_page(&vm))
        }

        // htmx pushes this URL, so a reload (no HX-Request) gets the full page.
        ("GET", "/listings/results") => {
            let criteria = criteria_from_query(&req)?;
            let listings = filter(&state.catalog, &criteria);
            let liked_ids = state.likes().liked_ids()?;
            if is_htmx(&req) {
                html_response(results_grid(&listings, &liked_ids))
            } else {
                html_response(home_page(&HomeVm {
                    criteria,
                    listings,
                    liked_ids,
                }))
            }
        }

        ("GET", p) if p.starts_with("/listings/") => {
            let id = parse_listing_id(&p["/listings/".len()..])?;
            let listing = find_listing(&state.catalog, id).ok_or(ServerError::NotFound)?;
            let liked = state.likes().is_liked(id)?;
            html_response(listing_page(listing, liked))
        }

        ("GET", "/liked") => {
            let likes = state.likes();
            let vm = DashboardVm {
                liked: likes.liked_listings()?,
                snapshot_count: likes.liked_snapshots()?.len(),
            };
            html_response(dashboard_page(&vm))
        }

        ("POST", p) if p.starts_with("/likes/") => {
            let id = parse_listing_id(&p["/likes/".len()..])?;
            let listing = find_listing(&state.catalog, id).ok_or(ServerError::NotFound)?;
            state.likes().toggle(listing)?;
            redirect_response(&back_location(&req))
        }

        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        _ => Err(ServerError::NotFound),
    }
}

fn criteria_from_query(req: &Request) -> Result<FilterCriteria, ServerError> {
    let params = parse_query(req);
    let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

    let criteria = FilterCriteria::from_raw(get("location"), get("type"), get("price"))
        .map_err(|e| {
            tracing::warn!(error = %e, "rejected filter");
            ServerError::from(e)
        })?;
    tracing::debug!(?criteria, "filtering listings");
    Ok(criteria)
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .is_some_and(|v| v.as_bytes() == b"true")
}

fn parse_listing_id(raw: &str) -> Result<u32, ServerError> {
    let invalid = || ServerError::BadRequest(format!("invalid listing id: {raw:?}"));
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

/// Path and query of the `Referer`, so a like keeps the user's filters.
fn back_location(req: &Request) -> String {
    req.headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .and_then(|r| Url::parse(r).ok())
        .map(|url| match url.query() {
            Some(q) => format!("{}?{}", url.path(), q),
            None => url.path().to_string(),
        })
        .unwrap_or_else(|| "/".to_string())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
