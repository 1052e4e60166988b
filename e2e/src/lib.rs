#[cfg(test)]
mod graphql_over_http;
#[cfg(test)]
mod probes;
#[cfg(test)]
mod testkit;
#[cfg(test)]
mod upstream_errors;
