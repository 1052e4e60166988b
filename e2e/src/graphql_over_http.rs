#[cfg(test)]
mod graphql_over_http_e2e_tests {
    use mockito::Matcher;
    use ntex::web::test;
    use serde_json::json;

    use crate::testkit::{init_gateway_with_upstream, init_graphql_request, read_json};

    #[ntex::test]
    async fn should_execute_queries_sent_over_post() {
        let mut upstream = mockito::Server::new_async().await;
        let discover = upstream
            .mock("GET", "/discover/movie")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "e2e-api-key".into()),
                Matcher::UrlEncoded("sort_by".into(), "popularity.desc".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"page": 1, "results": [{"id": 7, "title": "Seven"}, {"id": 8, "title": "Eight"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = init_graphql_request("{ movies { id title } }", None);
        let resp = test::call_service(&gateway.app, req.to_request()).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|value| value.to_str().ok()),
            Some("application/json")
        );
        let body = read_json(resp).await;
        discover.assert_async().await;
        assert_eq!(
            body,
            json!({
                "data": {
                    "movies": [
                        {"id": "7", "title": "Seven"},
                        {"id": "8", "title": "Eight"}
                    ]
                }
            })
        );
    }

    #[ntex::test]
    async fn should_pass_variables_to_resolvers() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/movie/603")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"id": 603, "title": "The Matrix", "budget": 63000000}"#)
            .expect(1)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = init_graphql_request(
            "query Movie($id: ID) { movie(id: $id) { title budget } }",
            Some(sonic_rs::json!({ "id": "603" })),
        );
        let resp = test::call_service(&gateway.app, req.to_request()).await;

        assert!(resp.status().is_success());
        assert_eq!(
            read_json(resp).await,
            json!({ "data": { "movie": { "title": "The Matrix", "budget": 63000000 } } })
        );
    }

    #[ntex::test]
    async fn should_execute_queries_sent_over_get() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/movie/1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"id": 1, "title": "One"}"#)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/graphql?query=%7B%20movie(id%3A%201)%20%7B%20title%20%7D%20%7D")
            .to_request();
        let resp = test::call_service(&gateway.app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            read_json(resp).await,
            json!({ "data": { "movie": { "title": "One" } } })
        );
    }

    #[ntex::test]
    async fn should_reject_mutations_over_get() {
        let mut upstream = mockito::Server::new_async().await;
        let any = upstream
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/graphql?query=mutation%20%7B%20rateMovie(id%3A%201%2C%20rating%3A%205)%20%7D")
            .to_request();
        let resp = test::call_service(&gateway.app, req).await;

        assert_eq!(resp.status(), 405);
        let body = read_json(resp).await;
        any.assert_async().await;
        assert_eq!(
            body["errors"][0]["extensions"]["code"],
            "MUTATION_NOT_ALLOWED_OVER_GET"
        );
        assert_eq!(
            body["errors"][0]["message"],
            "Cannot perform mutations over GET"
        );
    }

    #[ntex::test]
    async fn should_reject_malformed_bodies() {
        let upstream = mockito::Server::new_async().await;
        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = test::TestRequest::post()
            .uri("/graphql")
            .header("content-type", "application/json")
            .set_payload("{\"query\": ")
            .to_request();
        let resp = test::call_service(&gateway.app, req).await;

        assert_eq!(resp.status(), 400);
        let body = read_json(resp).await;
        assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_REQUEST");
        assert_eq!(body.get("data"), None);
    }

    #[ntex::test]
    async fn should_reject_unsupported_methods() {
        let upstream = mockito::Server::new_async().await;
        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = test::TestRequest::default()
            .method(ntex::http::Method::PUT)
            .uri("/graphql")
            .to_request();
        let resp = test::call_service(&gateway.app, req).await;

        assert_eq!(resp.status(), 405);
        assert_eq!(
            resp.headers()
                .get("allow")
                .and_then(|value| value.to_str().ok()),
            Some("GET, POST")
        );
        let body = read_json(resp).await;
        assert_eq!(body["errors"][0]["extensions"]["code"], "METHOD_NOT_ALLOWED");
    }

    #[ntex::test]
    async fn should_serve_graphiql_on_plain_get() {
        let upstream = mockito::Server::new_async().await;
        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = test::TestRequest::get().uri("/graphql").to_request();
        let resp = test::call_service(&gateway.app, req).await;

        assert_eq!(resp.status(), 200);
        assert!(resp
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("text/html")));
        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("graphiql"));
    }

    #[ntex::test]
    async fn should_require_a_query_when_graphiql_is_disabled() {
        let upstream = mockito::Server::new_async().await;
        let gateway = init_gateway_with_upstream(&upstream.url(), "graphiql:\n  enabled: false\n")
            .await
            .unwrap();

        let req = test::TestRequest::get().uri("/graphql").to_request();
        let resp = test::call_service(&gateway.app, req).await;

        assert_eq!(resp.status(), 400);
        let body = read_json(resp).await;
        assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_REQUEST");
    }

    #[ntex::test]
    async fn should_serve_a_custom_graphql_endpoint() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/discover/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(
            &upstream.url(),
            "http:\n  graphql_endpoint: /api/graphql\n",
        )
        .await
        .unwrap();

        let req = init_graphql_request("{ movies { id } }", None)
            .uri("/api/graphql")
            .to_request();
        let resp = test::call_service(&gateway.app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(read_json(resp).await, json!({ "data": { "movies": [] } }));

        let req = init_graphql_request("{ movies { id } }", None).to_request();
        let resp = test::call_service(&gateway.app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
