use async_graphql::http::GraphiQLSource;
use ntex::http::{header::CONTENT_TYPE, Response, ResponseBuilder, StatusCode};

pub fn graphiql_response(graphql_endpoint: &str) -> Response {
    let page = GraphiQLSource::build().endpoint(graphql_endpoint).finish();

    ResponseBuilder::new(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(page)
}
