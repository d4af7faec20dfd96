use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;
use crate::domain::details::BookDetails;

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsQuery {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_details(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> Result<Json<BookDetails>, ApiError> {
    let title = query.title.trim();
    if title.is_empty() {
        return Err(AppError::validation("title is required").into());
    }

    let details = state
        .details_service
        .fetch(title, query.author.trim())
        .await;
    Ok(Json(details))
}
