pub const GATEWAY_VERSION: &str = env!("CARGO_PKG_VERSION");
