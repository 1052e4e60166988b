pub mod error;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use movie_db_client::MovieDbClient;

use crate::schema::{mutation::MutationRoot, query::QueryRoot};

pub type MovieSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The client, and with it the guest session, lives as long as the schema.
pub fn build_schema(client: MovieDbClient) -> MovieSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(client)
        .finish()
}
