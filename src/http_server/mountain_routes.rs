//! Mountain HTTP Routes
//!
//! Endpoints for batch insert, filtered reads, update-by-id and delete-by-id.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::model::Mountain;
use crate::store::{MountainQuery, MountainStore};
use crate::validation;

use super::errors::ApiError;

/// Query-string filters accepted by every GET route.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Hemisphere filter, "true" or "false"
    #[serde(rename = "northern-hemisphere")]
    pub northern_hemisphere: Option<String>,

    /// Strictly-greater-than altitude bound
    pub altitude: Option<String>,
}

/// Create the mountain routes
pub fn mountain_routes(store: Arc<MountainStore>) -> Router {
    Router::new()
        .route("/", post(add_mountains_handler))
        .route("/", get(get_all_handler))
        .route("/country/{country}", get(get_by_country_handler))
        .route("/country/{country}/range/{range}", get(get_by_range_handler))
        .route(
            "/country/{country}/range/{range}/name/{name}",
            get(get_by_name_handler),
        )
        .route("/id/{id}", get(get_by_id_handler))
        .route("/update-mountain/{id}", put(update_mountain_handler))
        .route("/delete-mountain/{id}", delete(delete_mountain_handler))
        .with_state(store)
}

/// Shared query tri-state: invalid filters answer 200 with an empty list,
/// a valid query with no matches answers 204, matches answer 200 with the
/// JSON array.
fn query_response(store: &MountainStore, query: MountainQuery) -> Result<Response, ApiError> {
    if !validation::query_is_valid(&query) {
        return Ok((StatusCode::OK, Json(Vec::<Mountain>::new())).into_response());
    }

    let matches = store.query(&query)?;
    if matches.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok((StatusCode::OK, Json(matches)).into_response())
    }
}

/// Batch insert handler
async fn add_mountains_handler(
    State(store): State<Arc<MountainStore>>,
    Json(batch): Json<Vec<Mountain>>,
) -> Result<StatusCode, ApiError> {
    store.insert(batch)?;
    Ok(StatusCode::OK)
}

/// Unfiltered (query-params only) read handler
async fn get_all_handler(
    State(store): State<Arc<MountainStore>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let query = MountainQuery {
        hemisphere: params.northern_hemisphere,
        altitude: params.altitude,
        ..Default::default()
    };
    query_response(&store, query)
}

/// Read by country
async fn get_by_country_handler(
    State(store): State<Arc<MountainStore>>,
    Path(country): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let query = MountainQuery {
        country: Some(country),
        hemisphere: params.northern_hemisphere,
        altitude: params.altitude,
        ..Default::default()
    };
    query_response(&store, query)
}

/// Read by country and range
async fn get_by_range_handler(
    State(store): State<Arc<MountainStore>>,
    Path((country, range)): Path<(String, String)>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let query = MountainQuery {
        country: Some(country),
        range: Some(range),
        hemisphere: params.northern_hemisphere,
        altitude: params.altitude,
        ..Default::default()
    };
    query_response(&store, query)
}

/// Read by country, range and name
async fn get_by_name_handler(
    State(store): State<Arc<MountainStore>>,
    Path((country, range, name)): Path<(String, String, String)>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let query = MountainQuery {
        country: Some(country),
        range: Some(range),
        name: Some(name),
        hemisphere: params.northern_hemisphere,
        altitude: params.altitude,
        ..Default::default()
    };
    query_response(&store, query)
}

/// Read by id
async fn get_by_id_handler(
    State(store): State<Arc<MountainStore>>,
    Path(id): Path<String>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let query = MountainQuery {
        id: Some(id),
        hemisphere: params.northern_hemisphere,
        altitude: params.altitude,
        ..Default::default()
    };
    query_response(&store, query)
}

/// Update-by-id handler
async fn update_mountain_handler(
    State(store): State<Arc<MountainStore>>,
    Path(id): Path<u64>,
    Json(replacement): Json<Mountain>,
) -> Result<StatusCode, ApiError> {
    store.update_by_id(id, replacement)?;
    Ok(StatusCode::OK)
}

/// Delete-by-id handler
async fn delete_mountain_handler(
    State(store): State<Arc<MountainStore>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    store.delete_by_id(id)?;
    Ok(StatusCode::OK)
}
