//! Pagination Tests
//!
//! Query extraction bounded by configured page sizes.

use axum::extract::Query;
use axum::http::Uri;

use service_template::presentation::pagination::{Page, PageParams};

use crate::common::settings_from;

fn params(uri: &str) -> PageParams {
    let uri: Uri = uri.parse().unwrap();
    let Query(params) = Query::<PageParams>::try_from_uri(&uri).unwrap();
    params
}

#[test]
fn test_query_within_limits() {
    let settings = settings_from(&[]);
    let page = params("/items?page=3&page_size=10").resolve(&settings);

    assert_eq!(
        page,
        Page {
            page: 3,
            size: 10,
            offset: 20,
        }
    );
}

#[test]
fn test_query_uses_overridden_limits() {
    let settings = settings_from(&[("DEFAULT_PAGE_SIZE", "50"), ("MAX_PAGE_SIZE", "60")]);

    assert_eq!(params("/items").resolve(&settings).size, 50);
    assert_eq!(params("/items?page_size=1000").resolve(&settings).size, 60);
}
