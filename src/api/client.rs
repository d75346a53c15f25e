//! HTTP-backed implementation of [`ApiClient`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::endpoints::Endpoint;
use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{ErrorContext, NetworkError, ResultExt, WanError, WanResult};
use crate::models::{
    ApiResponse, Article, ArticlePage, Banner, NavigationGroup, ProjectCategory, ProjectPage,
    SystemNode,
};
use crate::traits::{ApiClient, Headers, HttpClient, HttpError};

/// Client for the WanAndroid read API.
///
/// Holds no per-request state; clone the `Arc` it is usually wrapped in
/// rather than the client itself.
///
/// ```ignore
/// let client = WanAndroidClient::new(ClientConfig::default())?;
/// let banners = client.fetch_banners().await?;
/// ```
pub struct WanAndroidClient {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
    headers: Headers,
}

impl WanAndroidClient {
    /// Build a client on top of reqwest, honouring the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::from_config(&config)?;
        Ok(Self::with_http(config, Arc::new(http)))
    }

    /// Build a client on any [`HttpClient`].
    pub fn with_http(config: ClientConfig, http: Arc<dyn HttpClient>) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), config.user_agent().to_string());
        Self {
            config,
            http,
            headers,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one GET and decode the outer envelope.
    ///
    /// A non-2xx status is a [`NetworkError`]; an envelope with
    /// `errorCode != 0` is returned as `Ok` for the repository to judge.
    async fn get_envelope<T>(&self, endpoint: Endpoint) -> WanResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.config.url_for(&endpoint.path());
        let ctx = || {
            ErrorContext::new(endpoint.kind().as_str())
                .with_url(url.as_str())
                .with_page(endpoint.page())
        };

        debug!(endpoint = %endpoint, url = %url, "GET");

        let response = self
            .http
            .get(&url, &self.headers)
            .await
            .map_err(NetworkError::from)
            .with_context(ctx)?;

        if !response.is_success() {
            warn!(
                endpoint = %endpoint,
                status = response.status,
                "Request failed with non-success status"
            );
            let err = NetworkError::from_status(response.status, response.text_lossy());
            return Err(WanError::from(err).with_context(ctx()));
        }

        let envelope: ApiResponse<T> = response
            .json()
            .map_err(|e| WanError::Decode {
                what: endpoint.to_string(),
                message: e.to_string(),
            })
            .with_context(ctx)?;

        debug!(
            endpoint = %endpoint,
            error_code = envelope.error_code,
            has_data = envelope.data.is_some(),
            "Envelope received"
        );
        Ok(envelope)
    }
}

#[async_trait]
impl ApiClient for WanAndroidClient {
    async fn fetch_banners(&self) -> WanResult<ApiResponse<Vec<Banner>>> {
        self.get_envelope(Endpoint::Banners).await
    }

    async fn fetch_articles(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>> {
        self.get_envelope(Endpoint::Articles { page }).await
    }

    async fn fetch_top_articles(&self) -> WanResult<ApiResponse<Vec<Article>>> {
        self.get_envelope(Endpoint::TopArticles).await
    }

    async fn fetch_project_categories(&self) -> WanResult<ApiResponse<Vec<ProjectCategory>>> {
        self.get_envelope(Endpoint::ProjectCategories).await
    }

    async fn fetch_projects(
        &self,
        page: u32,
        category_id: i64,
    ) -> WanResult<ApiResponse<ProjectPage>> {
        self.get_envelope(Endpoint::Projects { page, category_id })
            .await
    }

    async fn fetch_new_projects(&self, page: u32) -> WanResult<ApiResponse<ProjectPage>> {
        self.get_envelope(Endpoint::NewestProjects { page }).await
    }

    async fn fetch_system_tree(&self) -> WanResult<ApiResponse<Vec<SystemNode>>> {
        self.get_envelope(Endpoint::SystemTree).await
    }

    async fn fetch_square(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>> {
        self.get_envelope(Endpoint::Square { page }).await
    }

    async fn fetch_navigation(&self) -> WanResult<ApiResponse<Vec<NavigationGroup>>> {
        self.get_envelope(Endpoint::Navigation).await
    }

    async fn fetch_daily_question(&self, page: u32) -> WanResult<ApiResponse<ArticlePage>> {
        self.get_envelope(Endpoint::DailyQuestions { page }).await
    }
}
