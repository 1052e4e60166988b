use movie_gateway_config::MovieGatewayConfig;
use schemars::schema_for;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schema_for!(MovieGatewayConfig);
    let output = serde_json::to_string_pretty(&schema)?;
    println!("{}", output);

    Ok(())
}
