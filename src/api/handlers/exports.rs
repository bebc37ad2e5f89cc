//! Export endpoints - spreadsheet and PDF attachments

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::AppState;
use crate::api::error::ApiError;
use crate::export::{render_excel, render_pdf};

const EXCEL_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn attachment(bytes: Vec<u8>, content_type: &'static str, filename: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Export the record set as an Excel workbook
///
/// Renders the full non-deleted record set; a formatter failure surfaces
/// as a 500 carrying the underlying message.
#[utoipa::path(
    get,
    path = "/api/services/export/excel",
    tag = "Services",
    responses(
        (status = 200, description = "Workbook attachment (hizmetler.xlsx)"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Rendering failed")
    ),
    security(("bearer_auth" = []))
)]
pub async fn export_services_excel(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let services = state.storage.list_services().await?;
    let bytes = render_excel(&services)?;
    Ok(attachment(bytes, EXCEL_CONTENT_TYPE, "hizmetler.xlsx"))
}

/// Export the record set as a PDF table
///
/// Renders the full non-deleted record set; a formatter failure surfaces
/// as a 500 carrying the underlying message.
#[utoipa::path(
    get,
    path = "/api/services/export/pdf",
    tag = "Services",
    responses(
        (status = 200, description = "PDF attachment (hizmetler.pdf)"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Rendering failed")
    ),
    security(("bearer_auth" = []))
)]
pub async fn export_services_pdf(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let services = state.storage.list_services().await?;
    let bytes = render_pdf(&services)?;
    Ok(attachment(bytes, "application/pdf", "hizmetler.pdf"))
}
