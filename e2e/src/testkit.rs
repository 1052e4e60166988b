use movie_gateway::{configure_app_from_config, configure_ntex_app};
use movie_gateway_config::parse_yaml_config;
use ntex::{
    http::Request,
    web::{
        self,
        test::{self, TestRequest},
        WebResponse,
    },
    Pipeline, Service,
};
use sonic_rs::json;

pub fn init_graphql_request(op: &str, variables: Option<sonic_rs::Value>) -> TestRequest {
    let body = json!({
      "query": op,
      "variables": variables
    });

    test::TestRequest::post()
        .uri("/graphql")
        .header("content-type", "application/json")
        .set_payload(body.to_string())
}

pub struct TestGatewayApp<T> {
    pub app: Pipeline<T>,
}

/// Gateway app pointed at `upstream_url`, with any extra YAML appended to the config.
pub async fn init_gateway_with_upstream(
    upstream_url: &str,
    extra_config_yaml: &str,
) -> Result<
    TestGatewayApp<impl Service<Request, Response = WebResponse, Error = web::Error>>,
    Box<dyn std::error::Error>,
> {
    let config_yaml = format!(
        "upstream:\n  base_url: {}\n  api_key: e2e-api-key\n{}",
        upstream_url, extra_config_yaml
    );
    let gateway_config = parse_yaml_config(&config_yaml)?;
    let shared_state = configure_app_from_config(gateway_config)?;

    let app_state = shared_state.clone();
    let ntex_app = test::init_service(
        web::App::new()
            .state(shared_state)
            .configure(move |service_config| {
                configure_ntex_app(service_config, &app_state.gateway_config)
            }),
    )
    .await;

    Ok(TestGatewayApp { app: ntex_app })
}

pub async fn read_json(response: WebResponse) -> serde_json::Value {
    let body = test::read_body(response).await;

    serde_json::from_slice(&body).expect("expected a JSON response body")
}
