use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use wavelength_core::{AnalysisEnvelope, AnalysisStep, RawAnalysisInput};
use wavelength_strategist::{run_analysis, AnalysisError};

use crate::middleware::RequestId;

use super::AppState;

/// Runs one analysis and always answers with an envelope: 200 on success,
/// 400 for input the caller must fix, 500 otherwise.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<RawAnalysisInput>, JsonRejection>,
) -> (StatusCode, Json<AnalysisEnvelope>) {
    let raw = match body {
        Ok(Json(raw)) => raw,
        Err(rejection) => {
            tracing::warn!(request_id = %req_id.0, error = %rejection, "unreadable analyze body");
            return (
                StatusCode::BAD_REQUEST,
                Json(AnalysisEnvelope::failure("Invalid request body")),
            );
        }
    };

    let secrets = state.secrets.clone();
    let outcome = run_analysis(
        &state.config,
        raw,
        move |key| secrets(key),
        |step: AnalysisStep| {
            tracing::debug!(request_id = %req_id.0, step = %step, "analysis step");
        },
    )
    .await;

    match outcome {
        Ok(result) => (StatusCode::OK, Json(AnalysisEnvelope::success(result))),
        Err(e) => {
            let status = status_for(&e);
            tracing::error!(
                request_id = %req_id.0,
                status = status.as_u16(),
                error = %e,
                "analysis error"
            );
            (status, Json(AnalysisEnvelope::failure(e.to_string())))
        }
    }
}

fn status_for(error: &AnalysisError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
