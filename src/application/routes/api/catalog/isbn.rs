use axum::Json;
use axum::extract::{Path, State};

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;
use crate::domain::isbn::is_scannable_barcode;
use crate::domain::suggestions::BookSuggestion;

#[tracing::instrument(skip(state))]
pub(crate) async fn resolve_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<BookSuggestion>, ApiError> {
    let isbn = isbn.trim();
    if !is_scannable_barcode(isbn) {
        return Err(AppError::validation("barcode must be 8 to 13 digits").into());
    }

    state
        .isbn_resolver
        .resolve(isbn)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no book found for {isbn}")).into())
}
