use ntex::{
    http::Method,
    util::Bytes,
    web::{types::Query, HttpRequest},
};
use tracing::{trace, warn};

use crate::pipeline::error::PipelineError;

#[derive(serde::Deserialize, Debug)]
struct GETQueryParams {
    pub query: Option<String>,
}

#[derive(Debug)]
pub enum IncomingRequest {
    /// A GET without a `query` parameter.
    MissingQuery,
    Operation(async_graphql::Request),
}

#[inline]
pub fn deserialize_graphql_request(
    req: &HttpRequest,
    body_bytes: &Bytes,
) -> Result<IncomingRequest, PipelineError> {
    let http_method = req.method();

    match *http_method {
        Method::GET => {
            trace!("processing GET GraphQL operation");
            let query_params_str = req.uri().query().unwrap_or_default();
            let params = Query::<GETQueryParams>::from_query(query_params_str)
                .map_err(PipelineError::GetUnprocessableQueryParams)?
                .0;

            if params.query.is_none() {
                return Ok(IncomingRequest::MissingQuery);
            }

            let request = async_graphql::http::parse_query_string(query_params_str)
                .map_err(PipelineError::GetInvalidGraphQLParams)?;

            Ok(IncomingRequest::Operation(request))
        }
        Method::POST => {
            trace!("processing POST GraphQL operation");

            let request =
                sonic_rs::from_slice::<async_graphql::Request>(body_bytes).map_err(|e| {
                    warn!("failed to parse body: {}", e);
                    PipelineError::FailedToParseBody(e)
                })?;

            Ok(IncomingRequest::Operation(request))
        }
        _ => {
            warn!("unsupported HTTP method: {}", http_method);

            Err(PipelineError::UnsupportedHttpMethod(http_method.to_owned()))
        }
    }
}
