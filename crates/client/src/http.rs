use serde::de::DeserializeOwned;
use serde::Serialize;

use shared_types::AppError;

use crate::config::ClientConfig;

/// Which backend instance a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instance {
    /// Primary instance: records, case management.
    Api,
    /// Secondary instance: donation checkout bridge.
    Api2,
}

/// Thin JSON transport over the municipal REST backend.
///
/// Maps transport failures to `AppError::network`, per-request
/// timeouts to `AppError::timeout`, and non-2xx responses to the
/// backend's structured error body when it sends one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    fn url(&self, instance: Instance, path: &str) -> String {
        let base = match instance {
            Instance::Api => &self.config.api_base_url,
            Instance::Api2 => &self.config.api2_base_url,
        };
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.get_on(Instance::Api, path).await
    }

    pub async fn get_on<T: DeserializeOwned>(
        &self,
        instance: Instance,
        path: &str,
    ) -> Result<T, AppError> {
        let url = self.url(instance, path);
        tracing::debug!(%url, "GET");
        let req = self.apply_auth(self.http.get(&url));
        Self::handle(req.send().await).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.post_on(Instance::Api, path, body).await
    }

    pub async fn post_on<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        instance: Instance,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.url(instance, path);
        tracing::debug!(%url, "POST");
        let req = self.apply_auth(self.http.post(&url)).json(body);
        Self::handle(req.send().await).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.url(Instance::Api, path);
        tracing::debug!(%url, "PUT");
        let req = self.apply_auth(self.http.put(&url)).json(body);
        Self::handle(req.send().await).await
    }

    async fn handle<T: DeserializeOwned>(
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, AppError> {
        let response = result.map_err(|e| {
            if e.is_timeout() {
                AppError::timeout("Request timed out")
            } else {
                AppError::network(format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = AppError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), %err, "backend returned an error");
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::server(format!("Invalid response body: {}", e)))
    }
}
