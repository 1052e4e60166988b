use async_graphql::{Context, Object, Result, ID};
use movie_db_client::MovieDbClient;
use tracing::{debug, info};

use crate::schema::{
    error::{not_implemented, null_on_error, upstream_error},
    types::Movie,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Rates a movie under the gateway's guest session and returns the submitted rating.
    async fn rate_movie(&self, ctx: &Context<'_>, id: ID, rating: i32) -> Option<i32> {
        null_on_error(ctx, submit_rating(ctx, &id, rating).await)
    }

    /// Not supported by the upstream API. Always resolves to `null` with a `NOT_IMPLEMENTED` error.
    async fn upvote_movie(&self, ctx: &Context<'_>, movie_id: i32) -> Option<Movie> {
        debug!(movie_id, "rejecting upvoteMovie");

        null_on_error(ctx, Err(not_implemented("upvoteMovie")))
    }
}

async fn submit_rating(ctx: &Context<'_>, id: &ID, rating: i32) -> Result<Option<i32>> {
    let client = ctx.data::<MovieDbClient>()?;
    let session_id = client.guest_session_id().await.map_err(upstream_error)?;

    client
        .rate_movie(id.as_str(), &session_id, rating)
        .await
        .map_err(upstream_error)?;
    info!(movie_id = %id.as_str(), rating, "movie rated");

    Ok(Some(rating))
}
