use std::{fmt::Display, sync::LazyLock};

use ntex::web::HttpRequest;
use sonyflake::Sonyflake;

pub static REQUEST_ID_HEADER: &str = "x-request-id";

static SONYFLAKE: LazyLock<Option<Sonyflake>> = LazyLock::new(|| Sonyflake::new().ok());

/// Uses the caller's `x-request-id` when present, otherwise generates a new id.
pub fn obtain_req_correlation_id(request: &HttpRequest) -> RequestIdentifier<'_> {
    if let Some(req_id_header) = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        return RequestIdentifier::FromRequest(req_id_header);
    }

    let generated = SONYFLAKE
        .as_ref()
        .and_then(|generator| generator.next_id().ok())
        .unwrap_or(0);

    RequestIdentifier::Generated(generated)
}

pub enum RequestIdentifier<'a> {
    FromRequest(&'a str),
    Generated(u64),
}

impl Display for RequestIdentifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestIdentifier::FromRequest(id) => write!(f, "{}", id),
            RequestIdentifier::Generated(id) => write!(f, "{}", id),
        }
    }
}
