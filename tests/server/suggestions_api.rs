use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with, unreachable_url};

const DUNE_THUMBNAIL: &str =
    "http://books.google.com/books/content?id=B1hSG45JCX4C&printsec=frontcover&img=1&zoom=1&source=gbs_api";
const DUNE_COVER: &str =
    "https://books.google.com/books/content?id=B1hSG45JCX4C&printsec=frontcover&img=1&zoom=0&source=gbs_api&fife=w600";

#[tokio::test]
async fn duplicate_titles_merge_and_keep_the_cover() {
    let app = spawn_app().await;
    app.library_search("Dune", json!([{ "title": "Dune", "author_name": ["Frank Herbert"] }]))
        .await;
    app.volumes_query(
        "Dune",
        json!([{ "volumeInfo": {
            "title": "Dune",
            "authors": ["Frank Herbert"],
            "imageLinks": { "thumbnail": DUNE_THUMBNAIL }
        }}]),
    )
    .await;

    let (status, body) = app.get_json("/suggestions?q=Dune").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([{ "title": "Dune", "author": "Frank Herbert", "cover_url": DUNE_COVER }])
    );
}

#[tokio::test]
async fn prefix_matches_rank_first() {
    let app = spawn_app().await;
    app.library_search(
        "The Lord",
        json!([
            { "title": "Lord Jim", "author_name": ["Joseph Conrad"], "cover_i": 1 },
            { "title": "The Lord of the Rings", "author_name": ["J.R.R. Tolkien"], "cover_i": 2 }
        ]),
    )
    .await;

    let (status, body) = app.get_json("/suggestions?q=The%20Lord").await;

    assert_eq!(status, 200);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["The Lord of the Rings", "Lord Jim"]);
    assert_eq!(
        body[0]["cover_url"],
        "https://covers.openlibrary.org/b/id/2-L.jpg"
    );
}

#[tokio::test]
async fn blank_query_skips_the_catalogs() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.library)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.volumes)
        .await;

    let (status, body) = app.get_json("/suggestions?q=%20%20").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    let (status, body) = app.get_json("/suggestions").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn failing_catalogs_yield_an_empty_list() {
    let app = spawn_app().await;
    app.catalogs_fail(500).await;

    let (status, body) = app.get_json("/suggestions?q=Dune").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn one_catalog_down_still_returns_the_other() {
    let app = spawn_app_with(|config| config.google_books_url = unreachable_url()).await;
    app.library_search(
        "Emma",
        json!([{ "title": "Emma", "author_name": ["Jane Austen"], "cover_i": 9 }]),
    )
    .await;

    let (status, body) = app.get_json("/suggestions?q=Emma").await;

    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["author"], "Jane Austen");
}

#[tokio::test]
async fn missing_cover_is_backfilled_by_isbn() {
    let app = spawn_app().await;
    app.library_search("Emma", json!([])).await;
    app.volumes_query(
        "Emma",
        json!([{ "volumeInfo": {
            "title": "Emma",
            "industryIdentifiers": [{ "type": "ISBN_13", "identifier": "9780141439587" }]
        }}]),
    )
    .await;
    app.volumes_query(
        "isbn:9780141439587",
        json!([{ "volumeInfo": {
            "title": "Emma",
            "imageLinks": { "thumbnail": "http://books.google.com/books/content?id=emma&zoom=1" }
        }}]),
    )
    .await;

    let (status, body) = app.get_json("/suggestions?q=Emma").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([{
            "title": "Emma",
            "author": "Unknown Author",
            "cover_url": "https://books.google.com/books/content?id=emma&zoom=0&fife=w600"
        }])
    );
}

#[tokio::test]
async fn missing_cover_is_backfilled_by_title_and_author() {
    let app = spawn_app().await;
    app.library_search(
        "Dune Messiah",
        json!([{ "title": "Dune Messiah", "author_name": ["Frank Herbert"] }]),
    )
    .await;
    app.volumes_query("Dune Messiah", json!([])).await;
    app.volumes_query(
        "intitle:\"Dune Messiah\" inauthor:\"Frank Herbert\"",
        json!([{ "volumeInfo": {
            "title": "Dune Messiah",
            "imageLinks": { "thumbnail": "http://books.google.com/books/content?id=messiah&zoom=1" }
        }}]),
    )
    .await;

    let (_, body) = app.get_json("/suggestions?q=Dune%20Messiah").await;

    assert_eq!(
        body[0]["cover_url"],
        "https://books.google.com/books/content?id=messiah&zoom=0&fife=w600"
    );
}

#[tokio::test]
async fn suggestions_without_cover_omit_the_field() {
    let app = spawn_app().await;
    app.library_search("Obscure", json!([{ "title": "Obscure Pamphlet" }]))
        .await;

    let (_, body) = app.get_json("/suggestions?q=Obscure").await;

    assert_eq!(
        body,
        json!([{ "title": "Obscure Pamphlet", "author": "Unknown Author" }])
    );
}
