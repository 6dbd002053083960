//! Per-request logging for the tax API.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wraps every route (API, page, static files) in a `request` span.
///
/// The span carries method, URI and HTTP version; one `INFO` event is
/// emitted per response with its status and latency in milliseconds.
/// Rejected tax requests get an extra `WARN` event from the handler inside
/// the same span, so the rejection reason and the 400 line up in the logs.
///
/// With `LOG_FORMAT=text`:
///
/// ```text
/// INFO request{method=POST uri=/api/v1/calculate-tax version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// WARN request{method=POST uri=/api/v1/calculate-tax version=HTTP/1.1}: Tax request rejected reason=state is required
/// INFO request{method=POST uri=/api/v1/calculate-tax version=HTTP/1.1}: finished processing request latency=0 ms status=400
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    let span = DefaultMakeSpan::new().level(Level::INFO);
    let response = DefaultOnResponse::new()
        .level(Level::INFO)
        .latency_unit(LatencyUnit::Millis);

    TraceLayer::new_for_http()
        .make_span_with(span)
        .on_response(response)
}
