use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use async_trait::async_trait;
use rand::Rng;

pub const TRACE_ID_HEADER: &str = "X-B3-TraceId";
pub const SPAN_ID_HEADER: &str = "X-B3-SpanId";

/// B3 correlation identifiers. Every request starts a new trace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: String,
    pub span_id: String,
}

impl TraceContext {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let trace: u128 = rng.gen();
        let span: u64 = rng.gen();
        Self {
            trace_id: format!("{:032x}", trace),
            span_id: format!("{:016x}", span),
        }
    }
}

/// Attaches fresh trace and span headers before handing the request on.
pub struct TraceHeaders<T> {
    inner: T,
    enabled: bool,
}

impl<T> TraceHeaders<T> {
    pub fn new(inner: T, enabled: bool) -> Self {
        Self { inner, enabled }
    }
}

#[async_trait]
impl<T: Transport> Transport for TraceHeaders<T> {
    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if self.enabled {
            let context = TraceContext::generate();
            tracing::trace!(trace_id = %context.trace_id, span_id = %context.span_id, url = %request.url, "Tracing request");
            request.set_header(TRACE_ID_HEADER, context.trace_id);
            request.set_header(SPAN_ID_HEADER, context.span_id);
        }
        self.inner.send(request).await
    }
}
