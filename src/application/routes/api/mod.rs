pub(crate) mod catalog;
pub(crate) mod system;

pub(crate) use catalog::{details, isbn, suggestions};
pub(crate) use system::health;

use axum::routing::get;

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    catalog_routes().merge(system_routes())
}

fn catalog_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/suggestions", get(suggestions::list_suggestions))
        .route("/isbn/{isbn}", get(isbn::resolve_isbn))
        .route("/details", get(details::get_details))
}

fn system_routes() -> axum::Router<AppState> {
    axum::Router::new().route("/health", get(health::health))
}
