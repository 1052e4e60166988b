use ntex::{
    http::{header::ALLOW, Method, Response, ResponseBuilder, StatusCode},
    web::error::QueryPayloadError,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    // HTTP-related errors
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedHttpMethod(Method),

    // GET specific pipeline errors
    #[error("Missing query parameter: {0}")]
    GetMissingQueryParam(&'static str),
    #[error("Failed to parse query parameters")]
    GetUnprocessableQueryParams(QueryPayloadError),
    #[error("Failed to parse GraphQL request from query parameters: {0}")]
    GetInvalidGraphQLParams(async_graphql::ParseRequestError),
    #[error("Cannot perform mutations over GET")]
    MutationNotAllowedOverHttpGet,

    // POST specific pipeline errors
    #[error("Failed to parse GraphQL request payload: {0}")]
    FailedToParseBody(sonic_rs::Error),

    #[error("Failed to serialize GraphQL response: {0}")]
    FailedToSerializeResponse(sonic_rs::Error),
}

impl PipelineError {
    pub fn graphql_error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedHttpMethod(_) => "METHOD_NOT_ALLOWED",
            Self::MutationNotAllowedOverHttpGet => "MUTATION_NOT_ALLOWED_OVER_GET",
            Self::FailedToSerializeResponse(_) => "INTERNAL_SERVER_ERROR",
            _ => "BAD_REQUEST",
        }
    }

    pub fn default_status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedHttpMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MutationNotAllowedOverHttpGet => StatusCode::METHOD_NOT_ALLOWED,
            Self::GetMissingQueryParam(_) => StatusCode::BAD_REQUEST,
            Self::GetUnprocessableQueryParams(_) => StatusCode::BAD_REQUEST,
            Self::GetInvalidGraphQLParams(_) => StatusCode::BAD_REQUEST,
            Self::FailedToParseBody(_) => StatusCode::BAD_REQUEST,
            Self::FailedToSerializeResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct GraphQLErrorExtensions {
    pub code: &'static str,
}

#[derive(Serialize, Debug)]
pub struct GraphQLError {
    pub message: String,
    pub extensions: GraphQLErrorExtensions,
}

#[derive(Serialize, Debug)]
pub struct FailedExecutionResult {
    pub errors: Vec<GraphQLError>,
}

impl From<PipelineError> for Response {
    fn from(val: PipelineError) -> Self {
        let status = val.default_status_code();
        let result = FailedExecutionResult {
            errors: vec![GraphQLError {
                message: val.to_string(),
                extensions: GraphQLErrorExtensions {
                    code: val.graphql_error_code(),
                },
            }],
        };

        let mut builder = ResponseBuilder::new(status);
        if matches!(
            val,
            PipelineError::UnsupportedHttpMethod(_) | PipelineError::MutationNotAllowedOverHttpGet
        ) {
            builder.header(ALLOW, "GET, POST");
        }

        builder.json(&result)
    }
}
