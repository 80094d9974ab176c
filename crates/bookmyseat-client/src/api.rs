use crate::error::ApiError;
use crate::notify::ErrorHandler;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Typed JSON calls against one service base URL over the middleware pipeline.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    errors: ErrorHandler,
    base_url: String,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, errors: ErrorHandler, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { transport, errors, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Vec<(String, String)>) -> Result<T, ApiError> {
        let request = ApiRequest::get(self.url(path)).with_query(query);
        let response = self.transport.send(request).await?;
        self.decode(response)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| self.report(ApiError::Network(e.to_string())))?;
        let response = self.transport.send(ApiRequest::post(self.url(path), body)).await?;
        self.decode(response)
    }

    // Failures past the transport never passed through the interceptor, so report them here
    fn decode<T: DeserializeOwned>(&self, response: ApiResponse) -> Result<T, ApiError> {
        response.json().map_err(|e| self.report(e))
    }

    fn report(&self, err: ApiError) -> ApiError {
        self.errors.handle(&err);
        err
    }
}
