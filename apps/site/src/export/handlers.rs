use axum::{
    extract::State,
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderName, HeaderValue,
    },
    response::{Html, IntoResponse, Response},
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::PrintJob;
use crate::resume::preview::render_preview;
use crate::state::AppState;

static PAGE_COUNT: HeaderName = HeaderName::from_static("x-page-count");

/// GET /resume/print
/// Print-ready HTML of the current preview, served inline.
pub async fn handle_print(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let preview = render_preview(&state.store.current());
    Ok(Html(state.views.print(&preview, state.config.page_size)?))
}

/// GET /resume/export
/// Prints a snapshot of the document. Edits arriving meanwhile are not blocked
/// and do not affect this export.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let export_id = Uuid::new_v4();
    let preview = render_preview(&state.store.current());
    let job = PrintJob {
        title: preview.title(),
        preview,
    };

    let printed = state.printer.print(job).await?;
    info!(
        %export_id,
        title = %printed.title,
        backend = state.printer.backend(),
        pages = ?printed.pages,
        bytes = printed.bytes.len(),
        "Exported resume"
    );

    let disposition = HeaderValue::from_str(&printed.content_disposition())
        .map_err(|e| AppError::Export(format!("Invalid download name: {e}")))?;
    let content_type = HeaderValue::from_static(printed.content_type);
    let pages = printed.pages;

    let mut response = printed.bytes.into_response();
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, content_type);
    headers.insert(CONTENT_DISPOSITION, disposition);
    if let Some(pages) = pages {
        headers.insert(PAGE_COUNT.clone(), HeaderValue::from(pages));
    }
    Ok(response)
}
