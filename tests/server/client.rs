use bookshelf::infrastructure::client::BookshelfClient;
use serde_json::json;

use crate::helpers::{ISBN_1984, spawn_app};

#[tokio::test]
async fn client_reads_suggestions() {
    let app = spawn_app().await;
    app.library_search(
        "Dune",
        json!([{ "title": "Dune", "author_name": ["Frank Herbert"], "cover_i": 11 }]),
    )
    .await;
    let client = BookshelfClient::from_base_url(&app.address).unwrap();

    let suggestions = client.catalog().suggestions("Dune").await.unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].author, "Frank Herbert");
    assert_eq!(
        suggestions[0].cover_url.as_deref(),
        Some("https://covers.openlibrary.org/b/id/11-L.jpg")
    );
}

#[tokio::test]
async fn client_maps_unknown_isbn_to_none() {
    let app = spawn_app().await;
    app.catalogs_fail(500).await;
    let client = BookshelfClient::from_base_url(&app.address).unwrap();

    let found = client.catalog().isbn(ISBN_1984).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn client_surfaces_server_error_messages() {
    let app = spawn_app().await;
    let client = BookshelfClient::from_base_url(&app.address).unwrap();

    let err = client.catalog().details("  ", None).await.unwrap_err();

    assert!(err.to_string().contains("title is required"), "{err}");
}
