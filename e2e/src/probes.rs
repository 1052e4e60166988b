#[cfg(test)]
mod probes_e2e_tests {
    use ntex::web::test;

    use crate::testkit::init_gateway_with_upstream;

    #[ntex::test]
    async fn should_respond_to_health_checks() {
        let upstream = mockito::Server::new_async().await;
        let gateway = init_gateway_with_upstream(&upstream.url(), "")
            .await
            .unwrap();

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&gateway.app, req).await;
        assert!(resp.status().is_success());

        // Liveness does not depend on the upstream.
        drop(upstream);
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&gateway.app, req).await;
        assert!(resp.status().is_success());
    }
}
