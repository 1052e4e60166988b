use async_graphql::{Context, Object, Result, ID};
use movie_db_client::{models::MovieRecord, MovieDbClient};
use tracing::debug;

use crate::schema::{
    error::{null_on_error, upstream_error},
    types::Movie,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The first page of upstream's discovery listing, most popular first.
    async fn movies(&self, ctx: &Context<'_>) -> Option<Vec<Option<Movie>>> {
        null_on_error(ctx, discovered_movies(ctx).await)
    }

    /// Looks a movie up by upstream id, or by IMDb id when `id` is not given.
    /// Empty strings count as absent arguments.
    async fn movie(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        #[graphql(name = "imdb_id")] imdb_id: Option<String>,
    ) -> Option<Movie> {
        let id = id.map(|id| id.0).filter(|id| !id.is_empty());
        let imdb_id = imdb_id.filter(|imdb_id| !imdb_id.is_empty());

        null_on_error(ctx, movie_by_ids(ctx, id, imdb_id).await)
    }

    /// Movies rated under the gateway's guest session.
    async fn rated_movies(&self, ctx: &Context<'_>) -> Option<Vec<Option<Movie>>> {
        null_on_error(ctx, movies_rated_by_guest(ctx).await)
    }
}

fn into_movie_list(records: Vec<MovieRecord>) -> Option<Vec<Option<Movie>>> {
    Some(records.into_iter().map(|record| Some(record.into())).collect())
}

async fn discovered_movies(ctx: &Context<'_>) -> Result<Option<Vec<Option<Movie>>>> {
    let client = ctx.data::<MovieDbClient>()?;
    let listing = client.discover_movies().await.map_err(upstream_error)?;

    Ok(into_movie_list(listing.results))
}

async fn movie_by_ids(
    ctx: &Context<'_>,
    id: Option<String>,
    imdb_id: Option<String>,
) -> Result<Option<Movie>> {
    let client = ctx.data::<MovieDbClient>()?;

    let movie_id = match (id, imdb_id) {
        (Some(id), _) => id,
        (None, Some(imdb_id)) => {
            let found = client
                .find_by_imdb_id(&imdb_id)
                .await
                .map_err(upstream_error)?;

            match found.movie_results.first() {
                Some(first) => first.id.to_string(),
                None => {
                    debug!(imdb_id = %imdb_id, "no movie matches the imdb id");
                    return Ok(None);
                }
            }
        }
        (None, None) => return Ok(None),
    };

    let record = client.movie(&movie_id).await.map_err(upstream_error)?;

    Ok(Some(record.into()))
}

async fn movies_rated_by_guest(ctx: &Context<'_>) -> Result<Option<Vec<Option<Movie>>>> {
    let client = ctx.data::<MovieDbClient>()?;
    let session_id = client.guest_session_id().await.map_err(upstream_error)?;
    let listing = client
        .rated_movies(&session_id)
        .await
        .map_err(upstream_error)?;

    Ok(into_movie_list(listing.results))
}
