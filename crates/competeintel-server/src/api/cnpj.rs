use axum::{extract::Path, Extension, Json};
use competeintel_core::{lookup_cnpj, CnpjRecord};

use crate::middleware::RequestId;

use super::ApiError;

/// GET /api/cnpj/{cnpj}: validate a CNPJ and return sample registry data.
///
/// Accepts bare digits or the punctuated form with `/` percent-encoded.
pub(super) async fn lookup(
    Extension(req_id): Extension<RequestId>,
    Path(raw): Path<String>,
) -> Result<Json<CnpjRecord>, ApiError> {
    lookup_cnpj(&raw).map(Json).map_err(|e| {
        tracing::debug!(request_id = %req_id.0, cnpj = %raw, error = %e, "cnpj rejected");
        ApiError::new(req_id.0.clone(), "invalid_cnpj", e.to_string())
    })
}
