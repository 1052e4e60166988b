#[derive(Debug, thiserror::Error)]
pub enum MovieDbError {
    #[error("Upstream responded with HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Unexpected upstream response shape: {0}")]
    Shape(sonic_rs::Error),
    #[error("Failed to reach upstream: {0}")]
    Network(#[from] reqwest_middleware::Error),
    #[error("Invalid upstream base URL \"{0}\"")]
    InvalidBaseUrl(String),
    #[error("Missing upstream API key")]
    MissingApiKey,
    #[error("Failed to create HTTP client: {0}")]
    ClientCreation(reqwest::Error),
}

impl MovieDbError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Shape(_) => "UPSTREAM_RESPONSE_INVALID",
            Self::Network(_) => "UPSTREAM_UNREACHABLE",
            Self::InvalidBaseUrl(_) | Self::MissingApiKey | Self::ClientCreation(_) => {
                "UPSTREAM_CLIENT_MISCONFIGURED"
            }
        }
    }

    /// HTTP status of the upstream response, when one was received.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
