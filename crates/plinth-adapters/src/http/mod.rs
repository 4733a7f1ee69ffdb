//! HTTP adapters for the product-catalog backend.
//!
//! One shared blocking client with a hard 30s timeout; endpoints are built
//! from the configured API base URL:
//!
//! - `GET  {api}/packages/read`            - product catalog
//! - `POST {api}/packages/notify`          - project-created notification
//! - `GET  {api}/packages/download/{slug}` - paid-starter archive (see
//!   [`crate::acquisition::archive`])

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use plinth_core::application::error::{ApplicationError, CoreResult};
use plinth_core::application::ports::{CatalogClient, Notifier};
use plinth_core::domain::Product;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared blocking client. Used by every HTTP adapter so the
/// timeout policy stays in one place.
pub(crate) fn build_client() -> CoreResult<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("plinth/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApplicationError::Network {
            reason: format!("could not build HTTP client: {e}"),
        })
}

pub(crate) fn network_error(e: reqwest::Error) -> ApplicationError {
    ApplicationError::Network {
        reason: e.to_string(),
    }
}

/// Catalog client backed by `GET {api}/packages/read`.
pub struct HttpCatalogClient {
    client: Client,
    api_base_url: String,
}

impl HttpCatalogClient {
    pub fn new(api_base_url: impl Into<String>) -> CoreResult<Self> {
        Ok(Self {
            client: build_client()?,
            api_base_url: api_base_url.into(),
        })
    }
}

impl CatalogClient for HttpCatalogClient {
    fn fetch(&self) -> CoreResult<Vec<Product>> {
        let url = format!("{}/packages/read", self.api_base_url);
        debug!(%url, "fetching product catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?;

        response.json().map_err(|e| ApplicationError::Network {
            reason: format!("malformed catalog response: {e}"),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotifyBody<'a> {
    project_name: &'a str,
}

/// Project-created notifier backed by `POST {api}/packages/notify`.
///
/// The orchestrator treats failures here as non-fatal; this adapter still
/// reports them faithfully so they can be logged.
pub struct HttpNotifier {
    client: Client,
    api_base_url: String,
    auth_token: Option<String>,
}

impl HttpNotifier {
    pub fn new(api_base_url: impl Into<String>, auth_token: Option<String>) -> CoreResult<Self> {
        Ok(Self {
            client: build_client()?,
            api_base_url: api_base_url.into(),
            auth_token,
        })
    }
}

impl Notifier for HttpNotifier {
    fn notify(&self, project_name: &str) -> CoreResult<()> {
        let url = format!("{}/packages/notify", self.api_base_url);
        debug!(%url, %project_name, "sending project-created notification");

        let mut request = self.client.post(&url).json(&NotifyBody { project_name });
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(network_error)?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ApplicationError::Unauthorized {
                    reason: format!("notification rejected with {}", response.status()),
                })
            }
            status => Err(ApplicationError::Network {
                reason: format!("notification rejected with {status}"),
            }),
        }
    }
}
