use crate::error::ApiError;
use crate::notify::ErrorHandler;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use async_trait::async_trait;

/// Routes every failed request to the central [`ErrorHandler`], then returns the
/// error unchanged so the call site can clean up its own state.
pub struct ErrorInterceptor<T> {
    inner: T,
    handler: ErrorHandler,
}

impl<T> ErrorInterceptor<T> {
    pub fn new(inner: T, handler: ErrorHandler) -> Self {
        Self { inner, handler }
    }
}

#[async_trait]
impl<T: Transport> Transport for ErrorInterceptor<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        match self.inner.send(request).await {
            Ok(response) => Ok(response),
            Err(error) => {
                self.handler.handle(&error);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingNotifier, StubTransport};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_failure_is_reported_and_reraised() {
        let stub = StubTransport::new();
        stub.respond_status("GET", "/movies/42", 404);
        let notifier = Arc::new(RecordingNotifier::default());
        let transport = ErrorInterceptor::new(stub, ErrorHandler::new(notifier.clone()));

        let err = transport
            .send(ApiRequest::get("http://svc/movies/42"))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::from_status(404, "http://svc/movies/42"));
        assert_eq!(notifier.messages(), vec!["Resource not found".to_string()]);
    }

    #[tokio::test]
    async fn test_success_is_not_reported() {
        let stub = StubTransport::new();
        stub.respond_json("GET", "/movies", 200, serde_json::json!({ "movies": [] }));
        let notifier = Arc::new(RecordingNotifier::default());
        let transport = ErrorInterceptor::new(stub, ErrorHandler::new(notifier.clone()));

        transport.send(ApiRequest::get("http://svc/movies")).await.unwrap();

        assert!(notifier.messages().is_empty());
    }
}
