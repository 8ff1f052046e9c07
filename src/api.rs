// 🌐 REST API with Axum
//
// GET {prefix}/bankTransfer/last  → [transfer]
// GET {prefix}/bankTransfer/all   → [transfer, ...] in insertion order
// GET {prefix}/health             → {"status": "OK"}
//
// Read-only: no bodies, no query parameters, no write routes.

use crate::config::AppConfig;
use crate::entities::BankTransfer;
use crate::registry::TransferRegistry;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

/// Shared application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub registry: &'static TransferRegistry,
}

impl AppState {
    pub fn new(registry: &'static TransferRegistry) -> Self {
        Self { registry }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "OK" }))
}

/// GET /api/bankTransfer/last - Singleton list with the first-inserted transfer
async fn last_transfer(State(state): State<AppState>) -> Json<&'static [BankTransfer]> {
    info!("GET bankTransfer/last");
    Json(state.registry.last())
}

/// GET /api/bankTransfer/all - Every transfer
async fn all_transfers(State(state): State<AppState>) -> Json<&'static [BankTransfer]> {
    info!("GET bankTransfer/all");
    Json(state.registry.all())
}

/// Placeholder in index.html replaced by the configured API prefix
const API_PREFIX_PLACEHOLDER: &str = "{{API_PREFIX}}";

/// Render index.html so the page calls the mounted API
fn render_index(api_prefix: &str) -> String {
    include_str!("../web/index.html").replace(API_PREFIX_PLACEHOLDER, api_prefix)
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router
pub fn router(state: AppState, config: &AppConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/bankTransfer/last", get(last_transfer))
        .route("/bankTransfer/all", get(all_transfers))
        .with_state(state);

    // Axum refuses to nest at the root
    let prefix = config.api_prefix();
    let app = if prefix.is_empty() {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(&prefix, api_routes)
    };

    // GET / - Serve index.html
    let index = Html(render_index(&prefix));
    app.route("/", get(move || async move { index }))
        .nest_service("/static", ServeDir::new(&config.web_dir))
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_app(config: &AppConfig) -> Router {
        let registry = registry::init().unwrap();
        router(AppState::new(registry), config)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app(&AppConfig::default());
        let (status, json) = get_json(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "OK");
    }

    #[tokio::test]
    async fn test_last_returns_singleton() {
        let app = create_test_app(&AppConfig::default());
        let (status, json) = get_json(app, "/api/bankTransfer/last").await;

        assert_eq!(status, StatusCode::OK);
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["amount"], "1000.50");
    }

    #[tokio::test]
    async fn test_all_returns_insertion_order() {
        let app = create_test_app(&AppConfig::default());
        let (status, json) = get_json(app, "/api/bankTransfer/all").await;

        assert_eq!(status, StatusCode::OK);
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["amount"], "1000.50");
        assert_eq!(items[1]["amount"], "2500.80");
    }

    #[tokio::test]
    async fn test_transfer_json_shape() {
        let app = create_test_app(&AppConfig::default());
        let (_, json) = get_json(app, "/api/bankTransfer/last").await;
        let transfer = &json[0];

        assert!(transfer["requestDate"].is_string());
        assert!(transfer["executionDate"].is_string());
        assert_eq!(transfer["origin"]["country"], "FR");
        assert_eq!(transfer["origin"]["key"], "33");
        assert_eq!(transfer["origin"]["bban"]["bank"], "30002");
        assert_eq!(transfer["origin"]["bban"]["counter"], "00550");
        assert_eq!(transfer["origin"]["bban"]["account"], "21345678936");
        assert_eq!(transfer["origin"]["bban"]["key"], "25");
        assert_eq!(transfer["destination"]["country"], "GB");
        assert_eq!(transfer["destination"]["bban"]["bank"], "30001");
    }

    #[tokio::test]
    async fn test_repeated_queries_are_stable() {
        let config = AppConfig::default();
        let (_, first) = get_json(create_test_app(&config), "/api/bankTransfer/all").await;
        let (_, second) = get_json(create_test_app(&config), "/api/bankTransfer/all").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_custom_prefix() {
        let config = AppConfig {
            api_prefix: "/partiel1/api/".to_string(),
            ..AppConfig::default()
        };
        let (status, json) = get_json(create_test_app(&config), "/partiel1/api/bankTransfer/all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 2);

        let (status, _) = get_json(create_test_app(&config), "/api/bankTransfer/all").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_prefix() {
        let config = AppConfig {
            api_prefix: "/".to_string(),
            ..AppConfig::default()
        };
        let (status, json) = get_json(create_test_app(&config), "/bankTransfer/last").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_no_write_routes() {
        let app = create_test_app(&AppConfig::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bankTransfer/all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app(&AppConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("Bank transfers"));
        assert!(page.contains(r#"<meta name="api-prefix" content="/api">"#));
    }

    #[tokio::test]
    async fn test_index_page_follows_prefix() {
        let config = AppConfig {
            api_prefix: "/partiel1/api".to_string(),
            ..AppConfig::default()
        };
        let response = create_test_app(&config)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains(r#"content="/partiel1/api""#));
        assert!(!page.contains(API_PREFIX_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_prefix_without_leading_slash() {
        let config = AppConfig {
            api_prefix: "api".to_string(),
            ..AppConfig::default()
        };
        let (status, json) = get_json(create_test_app(&config), "/api/bankTransfer/last").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
