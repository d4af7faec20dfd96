use std::time::Duration;

use bookshelf::application::routes::app_router;
use bookshelf::application::state::{AppState, AppStateConfig};
use reqwest::Url;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::AbortHandle;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ISBN_1984: &str = "9780451524935";

pub struct TestApp {
    pub address: String,
    /// Stands in for Open Library
    pub library: MockServer,
    /// Stands in for Google Books
    pub volumes: MockServer,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }

    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, Value) {
        let response = reqwest::get(self.api_url(path))
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }

    /// Library search answering `q=<text>` with the given docs.
    pub async fn library_search(&self, text: &str, docs: Value) {
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", text))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "docs": docs })))
            .mount(&self.library)
            .await;
    }

    /// Volumes query answering `q=<q>` with the given items.
    pub async fn volumes_query(&self, q: &str, items: Value) {
        Mock::given(method("GET"))
            .and(path("/volumes"))
            .and(query_param("q", q))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": items })))
            .mount(&self.volumes)
            .await;
    }

    /// Every request to both catalogs fails with `status`.
    pub async fn catalogs_fail(&self, status: u16) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.library)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.volumes)
            .await;
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(configure: impl FnOnce(&mut AppStateConfig)) -> TestApp {
    let library = MockServer::start().await;
    let volumes = MockServer::start().await;

    let mut config = AppStateConfig::new(
        Url::parse(&library.uri()).expect("valid mock URL"),
        Url::parse(&volumes.uri()).expect("valid mock URL"),
    );
    config.catalog_timeout = Duration::from_secs(2);
    configure(&mut config);

    let state = AppState::from_config(config).expect("Failed to build app state");
    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{local_addr}");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        library,
        volumes,
        server_handle,
    }
}

/// An address nothing listens on.
pub fn unreachable_url() -> Url {
    Url::parse("http://127.0.0.1:9/").expect("valid URL")
}
