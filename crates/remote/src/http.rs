//! HTTP implementation of the remote catalog contract.

use std::time::Duration;

use async_trait::async_trait;

use storefront_core::{Product, ProductDraft};

use crate::catalog::{PageRequest, RemoteCatalog};
use crate::error::RemoteError;

/// Configuration for [`HttpRemoteCatalog`].
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// URL of the products collection, e.g. `https://host/api/products/`.
    /// A trailing slash is appended if missing.
    pub base_url: String,
    /// Optional bearer token sent on every request.
    pub bearer_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            bearer_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Remote catalog client over HTTP/JSON (reqwest).
#[derive(Debug, Clone)]
pub struct HttpRemoteCatalog {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl HttpRemoteCatalog {
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Listing URL with the server's OData-style paging parameters.
    fn list_url(&self, page: PageRequest) -> String {
        format!(
            "{}?$skip={}&$top={}&$orderby=ModifiedDate%20desc",
            self.config.base_url, page.skip, page.take
        )
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}", self.config.base_url, id)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Map a non-2xx response to [`RemoteError::Api`], passing 2xx through.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp.text().await.unwrap_or_default();
        Err(RemoteError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteCatalog for HttpRemoteCatalog {
    async fn list_products(&self, page: PageRequest) -> Result<Vec<Product>, RemoteError> {
        let url = self.list_url(page);
        tracing::debug!(%url, "listing products");

        let resp = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Self::check(resp)
            .await?
            .json::<Vec<Product>>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, RemoteError> {
        tracing::debug!(name = %draft.name, "creating product");

        let resp = self
            .authorize(self.client.post(&self.config.base_url))
            .json(draft)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Self::check(resp)
            .await?
            .json::<Product>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn delete_product(&self, id: i64) -> Result<(), RemoteError> {
        tracing::debug!(id, "deleting product");

        let resp = self
            .authorize(self.client.delete(self.item_url(id)))
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Self::check(resp).await?;
        Ok(())
    }
}
