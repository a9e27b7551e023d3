use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::client::AnscClient;
use crate::data_models::{
    Appeal, AppealSearchParams, Decision, DecisionSearchParams, PageRequest, Paginated,
};

use super::models::{AppealSearchRequest, DecisionSearchRequest, PageQuery};

const YEAR_MIN: i32 = 2000;
const YEAR_MAX: i32 = 9999;

pub async fn search_appeals_handler(
    State(client): State<Arc<AnscClient>>,
    Json(request): Json<AppealSearchRequest>,
) -> Result<Json<Paginated<Appeal>>, (StatusCode, String)> {
    check_year(request.filters.year)?;

    let page = client
        .search_appeals(&request.filters, &request.page)
        .await
        .map_err(fetch_error)?;
    Ok(Json(page))
}

pub async fn search_decisions_handler(
    State(client): State<Arc<AnscClient>>,
    Json(request): Json<DecisionSearchRequest>,
) -> Result<Json<Paginated<Decision>>, (StatusCode, String)> {
    check_year(request.filters.year)?;

    let page = client
        .search_decisions(&request.filters, &request.page)
        .await
        .map_err(fetch_error)?;
    Ok(Json(page))
}

/// `GET /api/appeals/:year?page=N` — all appeals of one year, no filters.
pub async fn appeals_by_year_handler(
    State(client): State<Arc<AnscClient>>,
    Path(year): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paginated<Appeal>>, (StatusCode, String)> {
    check_year(Some(year))?;

    let filters = AppealSearchParams {
        year: Some(year),
        ..Default::default()
    };
    let page = client
        .search_appeals(&filters, &page_request(&query))
        .await
        .map_err(fetch_error)?;
    Ok(Json(page))
}

/// `GET /api/decisions/:year?page=N` — all decisions of one year, no filters.
pub async fn decisions_by_year_handler(
    State(client): State<Arc<AnscClient>>,
    Path(year): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paginated<Decision>>, (StatusCode, String)> {
    check_year(Some(year))?;

    let filters = DecisionSearchParams {
        year: Some(year),
        ..Default::default()
    };
    let page = client
        .search_decisions(&filters, &page_request(&query))
        .await
        .map_err(fetch_error)?;
    Ok(Json(page))
}

fn page_request(query: &PageQuery) -> PageRequest {
    PageRequest {
        page: query.page,
        per_page: None,
    }
}

fn check_year(year: Option<i32>) -> Result<(), (StatusCode, String)> {
    match year {
        Some(year) if !(YEAR_MIN..=YEAR_MAX).contains(&year) => Err((
            StatusCode::BAD_REQUEST,
            format!("Invalid year {year}. Must be between {YEAR_MIN} and {YEAR_MAX}"),
        )),
        _ => Ok(()),
    }
}

fn fetch_error(e: crate::client::SearchError) -> (StatusCode, String) {
    (StatusCode::BAD_GATEWAY, format!("Search error: {e}"))
}
