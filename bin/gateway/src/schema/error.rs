use async_graphql::{Context, Error, ErrorExtensions, Result};
use movie_db_client::MovieDbError;

pub const NOT_IMPLEMENTED_CODE: &str = "NOT_IMPLEMENTED";
pub const INT_OUT_OF_RANGE_CODE: &str = "INT_OUT_OF_RANGE";

/// Field error for a failed upstream call. Carries `code` and, when a response was received,
/// `upstreamStatus` in the error extensions.
pub fn upstream_error(err: MovieDbError) -> Error {
    let code = err.error_code();
    let upstream_status = err.upstream_status();

    Error::new(err.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
        if let Some(status) = upstream_status {
            extensions.set("upstreamStatus", i32::from(status));
        }
    })
}

/// Settles a nullable field. A failure is reported under the field's path and the field
/// resolves to `null`, so sibling fields keep their values.
pub fn null_on_error<T>(ctx: &Context<'_>, result: Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|err| {
        ctx.add_error(ctx.set_error_path(err.into_server_error(ctx.item.pos)));
        None
    })
}

pub fn not_implemented(field_name: &str) -> Error {
    Error::new(format!("Field '{}' is not implemented", field_name))
        .extend_with(|_, extensions| extensions.set("code", NOT_IMPLEMENTED_CODE))
}

pub fn int_out_of_range(message: String) -> Error {
    Error::new(message).extend_with(|_, extensions| extensions.set("code", INT_OUT_OF_RANGE_CODE))
}
