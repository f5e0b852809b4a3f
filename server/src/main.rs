mod api;
mod auth;
mod config;
mod db;
mod models;
mod ordering;
mod schema;
mod seed;
mod telemetry;

use axum::extract::{FromRef, MatchedPath};
use axum::http::Request;
use axum::middleware;
use axum::Router;
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::GoogleClient;
use crate::config::Config;
use crate::db::DbPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<DbPool>,
    pub config: Arc<Config>,
    /// `None` when Google login is not configured
    pub google: Option<Arc<GoogleClient>>,
}

impl FromRef<AppState> for Arc<DbPool> {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

fn build_app(state: AppState) -> Router {
    let api_router = Router::new()
        .merge(api::public::router())
        .nest("/chefs", api::chefs::router())
        .nest("/recipes", api::recipes::router())
        .nest(
            "/users",
            api::users::router().route_layer(middleware::from_fn_with_state(
                state.pool.clone(),
                auth::require_auth,
            )),
        );

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .nest("/api/v1", api_router)
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi()
            .to_pretty_json()
            .expect("Failed to serialize OpenAPI spec");
        println!("{}", spec);
        return;
    }

    telemetry::init_telemetry();

    let config = Config::from_env().expect("Failed to load configuration");
    let pool = Arc::new(db::create_pool(&config.database_url));

    if env::args().any(|arg| arg == "--seed") {
        let mut conn = pool.get().expect("Failed to get DB connection for seeding");
        seed::seed(&mut conn).expect("Failed to seed database");
        return;
    }

    let google = config.google.clone().map(|google| Arc::new(GoogleClient::new(google)));
    let bind_address = config.bind_address.clone();

    let state = AppState {
        pool,
        config: Arc::new(config),
        google,
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", bind_address, e));

    tracing::info!("Server listening on {}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);
    tracing::info!("OpenAPI spec available at http://{}/api-docs/openapi.json", bind_address);

    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::StatusCode;
    use diesel::pg::PgConnection;
    use diesel::r2d2::{ConnectionManager, Pool};
    use tower::ServiceExt;

    /// State whose pool never connects until a handler asks for a connection.
    fn test_state() -> AppState {
        let manager = ConnectionManager::<PgConnection>::new("postgres://localhost/kondate_test");
        let pool = Pool::builder().build_unchecked(manager);
        AppState {
            pool: Arc::new(pool),
            config: Arc::new(Config {
                database_url: "postgres://localhost/kondate_test".to_string(),
                bind_address: "127.0.0.1:0".to_string(),
                session_ttl_days: 30,
                google: None,
            }),
            google: None,
        }
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = build_app(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_users_routes_require_token() {
        let (status, body) = get("/api/v1/users").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Missing Authorization header");
    }

    #[tokio::test]
    async fn test_shopping_list_requires_token() {
        let uri = format!("/api/v1/users/{}/shopping-list", uuid::Uuid::new_v4());
        let (status, _) = get(&uri).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_google_failure_page() {
        let (status, body) = get("/api/v1/auth/google/failure").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "failure");
    }

    #[tokio::test]
    async fn test_is_logged_in_without_token() {
        let (status, body) = get("/api/v1/is_logged_in").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["loggedIn"], false);
    }

    #[tokio::test]
    async fn test_google_login_unconfigured() {
        let (status, body) = get("/api/v1/auth/google").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Google login is not configured");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/recipes/topic"].is_object());
    }
}
