//! HTTP content client for the site backend

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use rishom_core::domain::{CatalogItem, CatalogKind, Entity};
use rishom_shared::config::ApiSettings;

use crate::error::FetchError;

/// Where view models read content from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// `GET /api/entities`
    async fn fetch_entities(&self) -> Result<Vec<Entity>, FetchError>;

    /// `GET /api/entities/{slug}/products` or `/services`
    async fn fetch_catalog(&self, entity_slug: &str, kind: CatalogKind) -> Result<Vec<CatalogItem>, FetchError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// One attempt per request; `timeout_secs` bounds it.
    pub fn new(settings: &ApiSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(&url, e))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| classify(&url, e))
    }
}

fn classify(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout { url: url.to_string() }
    } else if err.is_decode() {
        FetchError::Decode { url: url.to_string(), message: err.to_string() }
    } else {
        FetchError::Transport { url: url.to_string(), message: err.to_string() }
    }
}

#[async_trait]
impl ContentSource for ApiClient {
    async fn fetch_entities(&self) -> Result<Vec<Entity>, FetchError> {
        self.get_json("/api/entities").await
    }

    async fn fetch_catalog(&self, entity_slug: &str, kind: CatalogKind) -> Result<Vec<CatalogItem>, FetchError> {
        let path = format!("/api/entities/{}/{}", entity_slug, kind.path_segment());
        self.get_json(&path).await
    }
}
