//! Async client for the movie-metadata REST API the gateway wraps.
//!
//! Every request carries the configured `api_key` and `language` query parameters.
//! Non-2xx responses surface as [`MovieDbError::Upstream`] with the status and raw body,
//! and 2xx bodies that do not match the expected model surface as [`MovieDbError::Shape`].

pub mod builder;
pub mod error;
pub mod models;
pub mod session;

pub use crate::{builder::MovieDbClientBuilder, error::MovieDbError};

use reqwest::{Method, Response};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::{
    models::{FindResults, GuestSession, MovieRecord, PagedResults, RatingRequest},
    session::GuestSessionCache,
};

pub struct MovieDbClient {
    pub(crate) http_client: ClientWithMiddleware,
    pub(crate) base_url: Url,
    pub(crate) api_key: String,
    pub(crate) language: String,
    pub(crate) guest_session: GuestSessionCache,
}

impl std::fmt::Debug for MovieDbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieDbClient")
            .field("base_url", &self.base_url.as_str())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl MovieDbClient {
    pub fn builder() -> MovieDbClientBuilder {
        MovieDbClientBuilder::new()
    }

    /// `GET /movie/{id}`
    pub async fn movie(&self, id: &str) -> Result<MovieRecord, MovieDbError> {
        let url = self.endpoint(&["movie", id], &[])?;
        self.send(url).await
    }

    /// `GET /find/{imdb_id}?external_source=imdb_id`
    pub async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<FindResults, MovieDbError> {
        let url = self.endpoint(&["find", imdb_id], &[("external_source", "imdb_id")])?;
        self.send(url).await
    }

    /// The fixed discovery listing: first page, most popular first, no adult or video content.
    pub async fn discover_movies(&self) -> Result<PagedResults<MovieRecord>, MovieDbError> {
        let url = self.endpoint(
            &["discover", "movie"],
            &[
                ("sort_by", "popularity.desc"),
                ("include_adult", "false"),
                ("include_video", "false"),
                ("page", "1"),
            ],
        )?;
        self.send(url).await
    }

    /// `GET /authentication/guest_session/new`. Always issues a new request, see
    /// [`MovieDbClient::guest_session_id`] for the cached variant.
    pub async fn create_guest_session(&self) -> Result<GuestSession, MovieDbError> {
        let url = self.endpoint(&["authentication", "guest_session", "new"], &[])?;
        self.send(url).await
    }

    /// Returns the guest session id of this client, creating the session on first use.
    pub async fn guest_session_id(&self) -> Result<String, MovieDbError> {
        let session = self
            .guest_session
            .get_or_create(|| async {
                let session = self.create_guest_session().await?;
                debug!(expires_at = ?session.expires_at, "created upstream guest session");
                Ok(session)
            })
            .await?;

        Ok(session.guest_session_id.clone())
    }

    /// The guest session stored by this client, if one was created already.
    pub fn cached_guest_session(&self) -> Option<&GuestSession> {
        self.guest_session.get()
    }

    /// `GET /guest_session/{session_id}/rated/movies`
    pub async fn rated_movies(
        &self,
        session_id: &str,
    ) -> Result<PagedResults<MovieRecord>, MovieDbError> {
        let url = self.endpoint(&["guest_session", session_id, "rated", "movies"], &[])?;
        self.send(url).await
    }

    /// `POST /movie/{id}/rating?guest_session_id={session_id}` with `{"value": rating}`.
    ///
    /// Only the status decides the outcome, any 2xx body is discarded unread.
    pub async fn rate_movie(
        &self,
        id: &str,
        session_id: &str,
        rating: i32,
    ) -> Result<(), MovieDbError> {
        let url = self.endpoint(
            &["movie", id, "rating"],
            &[("guest_session_id", session_id)],
        )?;
        self.dispatch(Method::POST, url, Some(RatingRequest { value: rating }))
            .await?;

        Ok(())
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, MovieDbError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MovieDbError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("api_key", &self.api_key)
                .append_pair("language", &self.language);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// `GET` with the 2xx body parsed into `T`.
    async fn send<T: DeserializeOwned>(&self, url: Url) -> Result<T, MovieDbError> {
        let path = url.path().to_string();
        let response = self.dispatch(Method::GET, url, None).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(reqwest_middleware::Error::from)?;

        sonic_rs::from_slice(&bytes).map_err(|err| {
            warn!(path = %path, error = %err, "unexpected upstream response shape");
            MovieDbError::Shape(err)
        })
    }

    /// Sends the request and turns any non-2xx status into [`MovieDbError::Upstream`].
    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Option<RatingRequest>,
    ) -> Result<Response, MovieDbError> {
        // The query string carries the API key, so only the path is logged.
        let path = url.path().to_string();
        debug!(%method, path = %path, "sending upstream request");

        let mut request: RequestBuilder = self.http_client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(%method, path = %path, error = %err, "failed to read upstream error body");
                String::new()
            }
        };
        warn!(%method, path = %path, status = status.as_u16(), "upstream request failed");

        Err(MovieDbError::Upstream {
            status: status.as_u16(),
            body,
        })
    }
}
