//! Typed views of the upstream JSON payloads.
//!
//! Only the fields exposed through the GraphQL schema are modeled; anything else the
//! upstream sends is ignored during deserialization. Fields that some endpoints omit
//! (the discover listing has no budget, only rated lists carry `rating`) are optional.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub production_companies: Option<Vec<CompanyRecord>>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    /// Rating given under the current guest session. Only present in rated listings.
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyRecord {
    pub id: i64,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

/// One page of a listing endpoint (`/discover/movie`, `/guest_session/{id}/rated/movies`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PagedResults<T> {
    #[serde(default)]
    pub page: Option<u32>,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FindResults {
    pub movie_results: Vec<FindMovieResult>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FindMovieResult {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuestSession {
    #[serde(default)]
    pub success: Option<bool>,
    pub guest_session_id: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RatingRequest {
    pub value: i32,
}
