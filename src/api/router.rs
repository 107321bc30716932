use axum::{
    handler::HandlerWithoutStateExt,
    middleware,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::flag;
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::types::not_found;

/// Create the full router: flag routes, health probes, static assets and
/// a plain `404` for everything else, including wrong methods on known paths
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.site.static_dir.as_str())
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found.into_service());

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check).fallback(not_found))
        .route("/ready", get(health::ready_check).fallback(not_found))
        .route("/live", get(health::live_check).fallback(not_found))
        // Page and swap
        .merge(flag::create_flag_router())
        .fallback_service(static_files)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::SiteConfig;
    use crate::domain::{FlagDimensions, FlagGenerator};

    fn test_router(static_dir: &str) -> Router {
        let site = SiteConfig {
            static_dir: static_dir.to_string(),
            ..SiteConfig::default()
        };

        create_router(AppState {
            generator: Arc::new(FlagGenerator::new(FlagDimensions::new(342, 180), 2..4)),
            site: Arc::new(site),
            intro_html: Arc::from("<h1>Flags</h1>"),
        })
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Pull the decoded hidden input values out of rendered markup
    fn hidden_components(markup: &str) -> Vec<String> {
        markup
            .split(r#"name="components" value=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(|v| v.replace("&quot;", "\""))
            .collect()
    }

    fn swap_form(components: &[String], selected: &str) -> String {
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        for c in components {
            form.append_pair("components", c);
        }
        form.append_pair("selected", selected);
        form.finish()
    }

    #[tokio::test]
    async fn test_index_renders_page() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store, no-cache, must-revalidate"
        );
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert_eq!(
            response.headers().get(header::REFERRER_POLICY).unwrap(),
            "strict-origin-when-cross-origin"
        );
        assert_eq!(response.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");

        let html = body_string(response).await;
        assert!(html.contains("<h1>Flags</h1>"));
        assert!(html.contains("<svg"));
        assert!((2..4).contains(&hidden_components(&html).len()));
    }

    #[tokio::test]
    async fn test_page_then_swap_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_string(response).await;
        let components = hidden_components(&html);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/swapComponent.svg")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .header("hx-request", "true")
                    .body(Body::from(swap_form(&components, "component-1")))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let svg = body_string(response).await;
        assert!(svg.starts_with("<svg"));

        let swapped = hidden_components(&svg);
        assert_eq!(swapped.len(), components.len());
        assert!(swapped.last().unwrap().contains(r#""componentId":"component-1-swapped""#));
        assert!(!swapped.iter().any(|c| c.contains(r#""componentId":"component-1""#)));
    }

    #[tokio::test]
    async fn test_swap_json_body() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let body = serde_json::json!({
            "components": r#"{"height":180,"width":342,"componentId":"component-0","componentIndex":"0"}"#,
            "selected": "component-0",
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/swapComponent.svg")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let svg = body_string(response).await;
        assert_eq!(hidden_components(&svg).len(), 1);
        assert!(svg.contains("component-0-swapped"));
    }

    #[tokio::test]
    async fn test_swap_failure_returns_500() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/swapComponent.svg")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("selected=component-0"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "500");
    }

    #[tokio::test]
    async fn test_static_file_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("site.css"), "main { display: grid; }").unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/site.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert_eq!(body_string(response).await, "main { display: grid; }");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "404");
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_path_returns_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let cases = [
            ("GET", "/swapComponent.svg"),
            ("POST", "/"),
            ("DELETE", "/health"),
        ];

        for (method, uri) in cases {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);
            assert_eq!(body_string(response).await, "404", "{} {}", method, uri);
        }
    }

    #[tokio::test]
    async fn test_health_and_live() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path().to_str().unwrap());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("\"status\":\"healthy\""));

        let response = app
            .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
