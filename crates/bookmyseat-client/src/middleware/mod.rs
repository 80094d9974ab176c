pub mod errors;
pub mod trace;

pub use errors::ErrorInterceptor;
pub use trace::{TraceContext, TraceHeaders, SPAN_ID_HEADER, TRACE_ID_HEADER};
