use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::errors::CatalogError;

pub const USER_AGENT: &str = concat!("Bookshelf/", env!("CARGO_PKG_VERSION"));

/// Per-request budget for catalog calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared client for every outbound catalog call.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// Ensure `url` ends with a slash so relative joins append to its path.
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path().trim_end_matches('/')));
    }
    url
}

pub(crate) fn join(base: &Url, path: &str, catalog: &'static str) -> Result<Url, CatalogError> {
    base.join(path)
        .map_err(|err| CatalogError::unavailable(catalog, format!("invalid path {path}: {err}")))
}

/// Send `request` and decode a JSON body.
///
/// Transport failures and timeouts become `Unavailable`, non-2xx statuses
/// `Status`, and bodies that are not JSON `Malformed`. JSON that does not fit
/// `T` at the top level decodes as `T::default()`.
pub(crate) async fn get_json<T>(request: RequestBuilder, catalog: &'static str) -> Result<T, CatalogError>
where
    T: DeserializeOwned + Default,
{
    let response = request
        .send()
        .await
        .map_err(|err| CatalogError::unavailable(catalog, err))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            catalog,
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| CatalogError::unavailable(catalog, err))?;

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|err| CatalogError::malformed(catalog, err))?;

    match serde_json::from_value(value) {
        Ok(parsed) => {
            debug!(catalog, bytes = bytes.len(), "catalog response decoded");
            Ok(parsed)
        }
        Err(err) => {
            warn!(catalog, error = %err, "unexpected catalog response shape");
            Ok(T::default())
        }
    }
}
