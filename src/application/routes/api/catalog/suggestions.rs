use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::application::state::AppState;
use crate::domain::suggestions::BookSuggestion;

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestionQuery {
    #[serde(default)]
    q: String,
}

/// Ranked autofill candidates. Catalog trouble shows up as fewer results, never as an error.
#[tracing::instrument(skip(state))]
pub(crate) async fn list_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Vec<BookSuggestion>> {
    Json(state.suggestion_service.search(&query.q).await)
}
