use crate::api::ApiClient;
use crate::error::ApiError;
use crate::middleware::{ErrorInterceptor, TraceHeaders};
use crate::movies::MovieCatalogClient;
use crate::notify::{ErrorHandler, Notifier};
use crate::reviews::ReviewClient;
use crate::transport::{ReqwestTransport, Transport};
use anyhow::Result;
use bookmyseat_config::Config;
use std::sync::Arc;

/// The outbound request chain: error interception around trace headers around the transport.
#[derive(Clone)]
pub struct Pipeline {
    transport: Arc<dyn Transport>,
    errors: ErrorHandler,
}

impl Pipeline {
    pub fn new<T: Transport + 'static>(inner: T, tracing_enabled: bool, notifier: Arc<dyn Notifier>) -> Self {
        let errors = ErrorHandler::new(notifier);
        let traced = TraceHeaders::new(inner, tracing_enabled);
        let transport: Arc<dyn Transport> = Arc::new(ErrorInterceptor::new(traced, errors.clone()));
        Self { transport, errors }
    }

    pub fn reqwest(tracing_enabled: bool, notifier: Arc<dyn Notifier>) -> Result<Self, ApiError> {
        Ok(Self::new(ReqwestTransport::new()?, tracing_enabled, notifier))
    }

    pub fn client(&self, base_url: impl Into<String>) -> ApiClient {
        ApiClient::new(Arc::clone(&self.transport), self.errors.clone(), base_url)
    }

    pub fn error_handler(&self) -> &ErrorHandler {
        &self.errors
    }
}

/// Both resource clients, wired from configuration.
#[derive(Clone)]
pub struct Services {
    pub movies: MovieCatalogClient,
    pub reviews: ReviewClient,
}

impl Services {
    pub fn from_pipeline(pipeline: &Pipeline, movie_base_url: &str, review_base_url: &str) -> Self {
        Self {
            movies: MovieCatalogClient::new(pipeline.client(movie_base_url)),
            reviews: ReviewClient::new(pipeline.client(review_base_url)),
        }
    }

    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let pipeline = Pipeline::reqwest(config.tracing.enabled, notifier)?;
        Self::with_pipeline(config, &pipeline)
    }

    pub fn with_pipeline(config: &Config, pipeline: &Pipeline) -> Result<Self> {
        let movie_base_url = config.services.movie_base_url()?;
        let review_base_url = config.services.review_base_url()?;
        Ok(Self::from_pipeline(pipeline, &movie_base_url, &review_base_url))
    }
}
