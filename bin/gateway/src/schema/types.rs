use async_graphql::{Context, Enum, Object, Result, SimpleObject, ID};
use movie_db_client::models::{CompanyRecord, MovieRecord};
use tracing::trace;

use crate::schema::error::{int_out_of_range, null_on_error};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Currency {
    Eur,
    Gbp,
    Usd,
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(rename_fields = "snake_case")]
pub struct Company {
    id: ID,
    logo_path: Option<String>,
    name: Option<String>,
    origin_country: Option<String>,
}

impl From<CompanyRecord> for Company {
    fn from(record: CompanyRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            logo_path: record.logo_path,
            name: record.name,
            origin_country: record.origin_country,
        }
    }
}

/// A movie as returned by one of the upstream endpoints. Fields the endpoint did not send
/// resolve to `null`.
pub struct Movie(MovieRecord);

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self(record)
    }
}

#[Object(rename_fields = "snake_case")]
impl Movie {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    /// Budget in the requested currency. Amounts are reported as sent by upstream.
    async fn budget(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "Some(Currency::Eur)")] currency: Option<Currency>,
    ) -> Option<i32> {
        trace!(?currency, movie_id = self.0.id, "resolving budget");

        null_on_error(ctx, self.0.budget.map(int_from_i64).transpose())
    }

    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    async fn release_date(&self) -> Option<&str> {
        self.0.release_date.as_deref()
    }

    async fn production_companies(&self) -> Option<Vec<Option<Company>>> {
        self.0.production_companies.as_ref().map(|companies| {
            companies
                .iter()
                .cloned()
                .map(|company| Some(company.into()))
                .collect()
        })
    }

    async fn popularity(&self) -> Option<f64> {
        self.0.popularity
    }

    async fn imdb_id(&self) -> Option<&str> {
        self.0.imdb_id.as_deref()
    }

    async fn votes(&self, ctx: &Context<'_>) -> Option<i32> {
        null_on_error(ctx, self.0.vote_count.map(int_from_i64).transpose())
    }

    /// Rating given under the gateway's guest session. Only set on `ratedMovies` entries.
    async fn rating(&self, ctx: &Context<'_>) -> Option<i32> {
        null_on_error(ctx, self.0.rating.map(int_from_f64).transpose())
    }
}

fn int_from_i64(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        int_out_of_range(format!(
            "Int cannot represent non 32-bit signed integer value: {}",
            value
        ))
    })
}

fn int_from_f64(value: f64) -> Result<i32> {
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(int_out_of_range(format!(
            "Int cannot represent non-integer value: {}",
            value
        )));
    }

    Ok(value as i32)
}
