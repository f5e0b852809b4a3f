pub mod auth;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (no auth middleware)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/google", get(auth::google::google_login))
        .route("/auth/google/callback", get(auth::google::google_callback))
        .route("/auth/google/failure", get(auth::google::google_failure))
        .route("/is_logged_in", get(auth::session::is_logged_in))
        .route("/register", post(auth::session::register))
        .route("/auth/logout", get(auth::session::logout))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::google::google_login,
        auth::google::google_callback,
        auth::google::google_failure,
        auth::session::is_logged_in,
        auth::session::register,
        auth::session::logout,
    ),
    components(schemas(
        auth::google::LoginResponse,
        auth::session::LoggedInResponse,
        auth::session::RegisterRequest,
        auth::session::RegisteredUserResponse,
    ))
)]
pub struct ApiDoc;
