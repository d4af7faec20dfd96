use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

const ARRAKIS: &str = "Set on the desert planet Arrakis, Dune is the story of the boy Paul Atreides.";

#[tokio::test]
async fn volume_details_come_first() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "intitle:\"Dune\" inauthor:\"Frank Herbert\""))
        .and(query_param("maxResults", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "volumeInfo": { "title": "Dune" } },
                { "volumeInfo": {
                    "description": format!("<p>{ARRAKIS}</p>"),
                    "categories": ["Fiction / Science Fiction / General"],
                    "publishedDate": "1965-08-01"
                }}
            ]
        })))
        .mount(&app.volumes)
        .await;

    let (status, body) = app
        .get_json("/details?title=Dune&author=Frank%20Herbert")
        .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "description": ARRAKIS, "genre": "Fiction", "published_year": "1965" })
    );
}

#[tokio::test]
async fn library_work_fills_in_when_volumes_fail() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.volumes)
        .await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("title", "Dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{ "key": "/works/OL893415W", "subject": ["Science fiction", "Deserts"] }]
        })))
        .mount(&app.library)
        .await;
    Mock::given(method("GET"))
        .and(path("/works/OL893415W.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "description": { "type": "/type/text", "value": ARRAKIS }
        })))
        .mount(&app.library)
        .await;

    let (status, body) = app.get_json("/details?title=Dune").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "description": ARRAKIS, "genre": "Science fiction" }));
}

#[tokio::test]
async fn nothing_found_is_an_empty_object() {
    let app = spawn_app().await;
    app.catalogs_fail(500).await;

    let (status, body) = app.get_json("/details?title=Unwritten").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = app.get_json("/details?title=%20&author=Anyone").await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "title is required");
}
