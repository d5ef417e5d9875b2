//! Serving previously uploaded incident media.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /uploads/{filename}
///
/// Raw file bytes with a content type guessed from the extension. 404 if
/// the file does not exist or `filename` is not a sanitised name.
pub async fn serve(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let media = state.media.open(&filename).await?;
    tracing::debug!(filename = %media.filename, content_type = %media.content_type, "Serving media");
    Ok(([(CONTENT_TYPE, media.content_type)], media.bytes).into_response())
}
