use ntex::web::HttpRequest;
use tracing::{info_span, Span};

use crate::logging::request_id::obtain_req_correlation_id;

pub static REQUEST_SPAN_TARGET: &str = "movie-gateway-requests";

/// Opens the span every log line of a single GraphQL request is recorded under.
pub fn request_span(request: &HttpRequest) -> Span {
    info_span!(
        target: REQUEST_SPAN_TARGET,
        "graphql_request",
        req_id = %obtain_req_correlation_id(request),
        http.method = %request.method(),
        http.path = %request.path(),
    )
}
