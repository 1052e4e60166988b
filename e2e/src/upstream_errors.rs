#[cfg(test)]
mod upstream_errors_e2e_tests {
    use mockito::Matcher;
    use ntex::web::test;
    use serde_json::{json, Value};

    use crate::testkit::{init_gateway_with_upstream, init_graphql_request, read_json};

    #[ntex::test]
    async fn should_null_the_field_and_report_upstream_status() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/movie/99")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = init_graphql_request("{ movie(id: 99) { id title } }", None);
        let resp = test::call_service(&gateway.app, req.to_request()).await;

        assert_eq!(resp.status(), 200, "field errors keep HTTP 200");
        let body = read_json(resp).await;
        assert_eq!(body["data"], json!({ "movie": null }));
        let errors = body["errors"].as_array().expect("expected errors");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["extensions"]["code"], "UPSTREAM_ERROR");
        assert_eq!(errors[0]["extensions"]["upstreamStatus"], 404);
        insta::assert_snapshot!(
            errors[0]["message"].as_str().unwrap(),
            @r#"Upstream responded with HTTP 404: {"status_code":34,"status_message":"The resource you requested could not be found."}"#
        );
    }

    #[ntex::test]
    async fn should_keep_sibling_fields_when_one_fails() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/discover/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": [{"id": 1, "title": "One"}]}"#)
            .create_async()
            .await;
        upstream
            .mock("GET", "/movie/2")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = init_graphql_request("{ movies { title } movie(id: 2) { title } }", None);
        let resp = test::call_service(&gateway.app, req.to_request()).await;

        let body = read_json(resp).await;
        assert_eq!(
            body["data"],
            json!({ "movies": [{ "title": "One" }], "movie": null })
        );
        assert_eq!(body["errors"][0]["path"], json!(["movie"]));
        assert_eq!(body["errors"][0]["extensions"]["upstreamStatus"], 500);
    }

    #[ntex::test]
    async fn should_report_malformed_upstream_payloads() {
        let mut upstream = mockito::Server::new_async().await;
        upstream
            .mock("GET", "/discover/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"page": 1}"#)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = init_graphql_request("{ movies { id } }", None);
        let resp = test::call_service(&gateway.app, req.to_request()).await;

        let body = read_json(resp).await;
        assert_eq!(body["data"]["movies"], Value::Null);
        assert_eq!(
            body["errors"][0]["extensions"]["code"],
            "UPSTREAM_RESPONSE_INVALID"
        );
        assert_eq!(body["errors"][0]["extensions"].get("upstreamStatus"), None);
    }

    #[ntex::test]
    async fn should_share_one_guest_session_across_requests() {
        let mut upstream = mockito::Server::new_async().await;
        let session = upstream
            .mock("GET", "/authentication/guest_session/new")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"success": true, "guest_session_id": "e2e-guest"}"#)
            .expect(1)
            .create_async()
            .await;
        let rating = upstream
            .mock("POST", "/movie/42/rating")
            .match_query(Matcher::UrlEncoded(
                "guest_session_id".into(),
                "e2e-guest".into(),
            ))
            .match_body(Matcher::Json(json!({ "value": 9 })))
            .with_status(201)
            .with_body(r#"{"status_code": 1, "status_message": "Success."}"#)
            .expect(1)
            .create_async()
            .await;
        let rated = upstream
            .mock("GET", "/guest_session/e2e-guest/rated/movies")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": [{"id": 42, "title": "Rated", "rating": 9.0}]}"#)
            .expect(1)
            .create_async()
            .await;

        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = init_graphql_request(
            "mutation Rate($id: ID!, $rating: Int!) { rateMovie(id: $id, rating: $rating) }",
            Some(sonic_rs::json!({ "id": "42", "rating": 9 })),
        );
        let resp = test::call_service(&gateway.app, req.to_request()).await;
        assert_eq!(
            read_json(resp).await,
            json!({ "data": { "rateMovie": 9 } })
        );

        let req = init_graphql_request("{ ratedMovies { id title rating } }", None);
        let resp = test::call_service(&gateway.app, req.to_request()).await;
        assert_eq!(
            read_json(resp).await,
            json!({ "data": { "ratedMovies": [{ "id": "42", "title": "Rated", "rating": 9 }] } })
        );

        session.assert_async().await;
        rating.assert_async().await;
        rated.assert_async().await;
    }

    #[ntex::test]
    async fn should_report_unsupported_upvotes() {
        let upstream = mockito::Server::new_async().await;
        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = init_graphql_request("mutation { upvoteMovie(movieId: 5) { id } }", None);
        let resp = test::call_service(&gateway.app, req.to_request()).await;

        let body = read_json(resp).await;
        assert_eq!(body["data"], json!({ "upvoteMovie": null }));
        assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_IMPLEMENTED");
    }
}
