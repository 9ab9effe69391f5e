use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use competeintel_core::SearchRequest;
use competeintel_mock::{run_search, SearchResponse};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// POST /api/search: find nearby competitors and analyse the market.
pub(super) async fn search_competitors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let rid = &req_id.0;

    let Json(request) = payload.map_err(|rejection| {
        let detail = rejection.body_text();
        tracing::debug!(request_id = %rid, error = %detail, "rejected search body");
        ApiError::new(rid, "invalid_body", detail)
    })?;

    let query = request.validate().map_err(|e| {
        tracing::debug!(request_id = %rid, error = %e, "search validation failed");
        ApiError::new(rid, "validation_error", e.to_string())
    })?;

    let response = run_search(&state.catalog, &query);
    tracing::info!(
        request_id = %rid,
        category = %query.category,
        city = query.city.name,
        radius_km = query.radius_km,
        has_target = query.target.is_some(),
        total_found = response.total_found,
        "search completed"
    );
    Ok(Json(response))
}
