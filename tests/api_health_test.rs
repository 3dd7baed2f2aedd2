//! Integration tests for the health endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    fn health_request() -> Request<Body> {
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap()
    }

    /// Tests that a reachable backend reports connected
    #[tokio::test]
    async fn it_reports_connected_when_backend_is_up() {
        let mut server = mockito::Server::new_async().await;
        let _tags = server
            .mock("GET", "/api/tags")
            .with_status(200)
            .with_body(r#"{"models":[]}"#)
            .create_async()
            .await;
        let (app, _state) = test_app(&server.url());

        let response = app.oneshot(health_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"status\":\"ok\""));
        assert!(body.contains("\"ollama\":\"connected\""));
    }

    /// Tests that an unreachable backend reports disconnected
    #[tokio::test]
    async fn it_reports_disconnected_when_backend_is_down() {
        // Nothing listens on port 1
        let (app, _state) = test_app("http://127.0.0.1:1");

        let response = app.oneshot(health_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"ollama\":\"disconnected\""));
    }

    /// Tests that an error status from the backend reports disconnected
    #[tokio::test]
    async fn it_reports_disconnected_when_backend_errors() {
        let mut server = mockito::Server::new_async().await;
        let _tags = server
            .mock("GET", "/api/tags")
            .with_status(500)
            .create_async()
            .await;
        let (app, _state) = test_app(&server.url());

        let response = app.oneshot(health_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"ollama\":\"disconnected\""));
    }
}
