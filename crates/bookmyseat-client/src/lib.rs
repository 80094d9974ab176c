pub mod api;
pub mod error;
pub mod loading;
pub mod middleware;
pub mod movies;
pub mod notify;
pub mod pipeline;
pub mod reviews;
pub mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use api::ApiClient;
pub use error::{ApiError, ErrorKind};
pub use loading::{InFlight, LoadingFlag};
pub use middleware::{ErrorInterceptor, TraceContext, TraceHeaders, SPAN_ID_HEADER, TRACE_ID_HEADER};
pub use movies::MovieCatalogClient;
pub use notify::{ErrorHandler, Notifier};
pub use pipeline::{Pipeline, Services};
pub use reviews::{ReviewClient, DEFAULT_PAGE_SIZE};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
