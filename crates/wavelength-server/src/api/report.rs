use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;
use wavelength_core::AnalysisResult;
use wavelength_report::{
    format_full_report, format_section, generate_report_csv, report_filename, Section,
};

use crate::middleware::RequestId;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub(super) struct TextReportQuery {
    pub section: Option<String>,
}

/// Plain-text report for a previously returned result, whole or one section.
pub(super) async fn text_report(
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TextReportQuery>,
    Json(result): Json<AnalysisResult>,
) -> Result<Response, ApiError> {
    let text = match query.section.as_deref() {
        None => format_full_report(&result),
        Some(raw) => {
            let section: Section = raw
                .parse()
                .map_err(|e: wavelength_report::ReportError| {
                    ApiError::new(req_id.0.clone(), "bad_request", e.to_string())
                })?;
            format_section(&result, section).ok_or_else(|| {
                ApiError::new(
                    req_id.0.clone(),
                    "not_found",
                    format!("result has no {section} section"),
                )
            })?
        }
    };

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response())
}

/// CSV export offered as a dated attachment.
pub(super) async fn csv_report(
    Extension(req_id): Extension<RequestId>,
    Json(result): Json<AnalysisResult>,
) -> Result<Response, ApiError> {
    let csv = generate_report_csv(&result).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "csv export failed");
        ApiError::new(req_id.0.clone(), "internal_error", "CSV export failed")
    })?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        report_filename(Utc::now().date_naive())
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
