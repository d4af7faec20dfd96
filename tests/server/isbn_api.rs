use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{ISBN_1984, spawn_app, spawn_app_with, unreachable_url};

#[tokio::test]
async fn volume_metadata_gets_a_library_cover() {
    let app = spawn_app().await;
    app.volumes_query(
        &format!("isbn:{ISBN_1984}"),
        json!([{ "volumeInfo": { "title": "1984", "authors": ["George Orwell"] } }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", ISBN_1984))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{ "title": "Nineteen Eighty-Four", "author_name": ["Orwell"], "cover_i": 8_575_741 }]
        })))
        .expect(1)
        .mount(&app.library)
        .await;

    let (status, body) = app.get_json(&format!("/isbn/{ISBN_1984}")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "title": "1984",
            "author": "George Orwell",
            "cover_url": "https://covers.openlibrary.org/b/id/8575741-L.jpg"
        })
    );
}

#[tokio::test]
async fn complete_volume_hit_skips_the_library() {
    let app = spawn_app().await;
    app.volumes_query(
        &format!("isbn:{ISBN_1984}"),
        json!([{ "volumeInfo": {
            "title": "1984",
            "authors": ["George Orwell"],
            "imageLinks": { "thumbnail": "http://books.google.com/books/content?id=kot&zoom=1" }
        }}]),
    )
    .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.library)
        .await;

    let (status, body) = app.get_json(&format!("/isbn/{ISBN_1984}")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body["cover_url"],
        "https://books.google.com/books/content?id=kot&zoom=0&fife=w600"
    );
}

#[tokio::test]
async fn library_only_hit_has_empty_author_when_unknown() {
    let app = spawn_app().await;
    app.volumes_query(&format!("isbn:{ISBN_1984}"), json!([])).await;
    app.library_search(ISBN_1984, json!([{ "title": "1984", "cover_i": 5 }]))
        .await;

    let (status, body) = app.get_json(&format!("/isbn/{ISBN_1984}")).await;

    assert_eq!(status, 200);
    assert_eq!(body["title"], "1984");
    assert_eq!(body["author"], "");
}

#[tokio::test]
async fn failing_catalogs_mean_not_found() {
    let app = spawn_app().await;
    app.catalogs_fail(500).await;

    let (status, body) = app.get_json(&format!("/isbn/{ISBN_1984}")).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn unreachable_catalogs_mean_not_found() {
    let app = spawn_app_with(|config| {
        config.open_library_url = unreachable_url();
        config.google_books_url = unreachable_url();
    })
    .await;

    let (status, body) = app.get_json(&format!("/isbn/{ISBN_1984}")).await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], format!("no book found for {ISBN_1984}"));
}

#[tokio::test]
async fn malformed_barcodes_are_rejected() {
    let app = spawn_app().await;

    for barcode in ["1234567", "97804515249351", "97804515x4935"] {
        let (status, body) = app.get_json(&format!("/isbn/{barcode}")).await;
        assert_eq!(status, 400, "barcode {barcode}");
        assert_eq!(body["error"], "invalid_request");
    }
}
