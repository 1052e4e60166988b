use std::{sync::Arc, time::Instant};

use async_graphql::parser::types::OperationType;
use ntex::{
    http::{header::CONTENT_TYPE, Method, Response, ResponseBuilder, StatusCode},
    util::Bytes,
    web::HttpRequest,
};
use tracing::{debug, error};

use crate::{
    pipeline::{
        error::PipelineError,
        graphiql::graphiql_response,
        graphql_request::{deserialize_graphql_request, IncomingRequest},
        operation_kind::requested_operation_type,
    },
    shared_state::GatewaySharedState,
};

pub mod error;
pub mod graphiql;
pub mod graphql_request;
pub mod operation_kind;

#[inline]
pub async fn graphql_request_handler(
    req: &HttpRequest,
    body_bytes: Bytes,
    shared_state: &Arc<GatewaySharedState>,
) -> Result<Response, PipelineError> {
    let started_at = Instant::now();

    let request = match deserialize_graphql_request(req, &body_bytes)? {
        IncomingRequest::Operation(request) => request,
        IncomingRequest::MissingQuery if shared_state.gateway_config.graphiql.enabled => {
            return Ok(graphiql_response(shared_state.gateway_config.graphql_path()));
        }
        IncomingRequest::MissingQuery => {
            return Err(PipelineError::GetMissingQueryParam("query"));
        }
    };

    if req.method() == Method::GET {
        let operation_type =
            requested_operation_type(&request.query, request.operation_name.as_deref());

        if let Some(OperationType::Mutation) = operation_type {
            error!("Mutation is not allowed over GET, stopping");
            return Err(PipelineError::MutationNotAllowedOverHttpGet);
        }
    }

    let response = shared_state.schema.execute(request).await;
    if response.is_err() {
        debug!(errors = response.errors.len(), "operation finished with errors");
    }

    let body = sonic_rs::to_vec(&response).map_err(PipelineError::FailedToSerializeResponse)?;
    debug!(elapsed = ?started_at.elapsed(), "operation executed");

    Ok(ResponseBuilder::new(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(body))
}
