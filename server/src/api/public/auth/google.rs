use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{create_session, generate_token, GoogleClient};
use crate::get_conn;
use crate::models::{NewUser, User};
use crate::schema::users;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use diesel::prelude::*;
use diesel::upsert::excluded;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

const STATE_COOKIE: &str = "kondate_oauth_state";
const STATE_COOKIE_PATH: &str = "/api/v1/auth/google";
const STATE_COOKIE_MAX_AGE_SECS: u32 = 600;
const FAILURE_PATH: &str = "/api/v1/auth/google/failure";

#[derive(Debug, Deserialize, IntoParams)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set by Google when the user denied consent.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for the Authorization header
    pub token: String,
    pub user_id: Uuid,
    /// False until the user has picked a name via /register
    pub registered: bool,
}

fn google_client(state: &AppState) -> ApiResult<Arc<GoogleClient>> {
    state
        .google
        .clone()
        .ok_or_else(|| ApiError::not_found("Google login is not configured"))
}

fn state_cookie(value: &str, max_age: u32) -> String {
    format!(
        "{STATE_COOKIE}={value}; HttpOnly; SameSite=Lax; Path={STATE_COOKIE_PATH}; Max-Age={max_age}"
    )
}

/// Finds `name` among the request's Cookie headers.
fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/google",
    tag = "auth",
    responses(
        (status = 303, description = "Redirect to Google's consent page"),
        (status = 404, description = "Google login is not configured", body = ErrorResponse)
    )
)]
pub async fn google_login(State(state): State<AppState>) -> ApiResult<Response> {
    let google = google_client(&state)?;
    let oauth_state = generate_token();

    let url = google.authorize_url(&oauth_state).map_err(|e| {
        tracing::error!("Failed to build Google authorize URL: {}", e);
        ApiError::Internal("Failed to start Google login".to_string())
    })?;

    Ok((
        [(
            header::SET_COOKIE,
            state_cookie(&oauth_state, STATE_COOKIE_MAX_AGE_SECS),
        )],
        Redirect::to(&url),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/google/callback",
    tag = "auth",
    params(CallbackQuery),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 303, description = "Login was cancelled; redirect to the failure page"),
        (status = 400, description = "Missing code or state", body = ErrorResponse),
        (status = 401, description = "State mismatch or Google rejected the code", body = ErrorResponse),
        (status = 404, description = "Google login is not configured", body = ErrorResponse)
    )
)]
pub async fn google_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> ApiResult<Response> {
    let google = google_client(&state)?;

    if let Some(error) = query.error {
        tracing::info!("Google login cancelled: {}", error);
        return Ok(Redirect::to(FAILURE_PATH).into_response());
    }

    let (Some(code), Some(returned_state)) = (query.code, query.state) else {
        return Err(ApiError::bad_request("code and state are required"));
    };

    let expected_state = read_cookie(&headers, STATE_COOKIE)
        .ok_or_else(|| ApiError::Unauthorized("Missing OAuth state".to_string()))?;
    if expected_state != returned_state {
        return Err(ApiError::Unauthorized("OAuth state mismatch".to_string()));
    }

    let profile = google.fetch_profile(&code).await.map_err(|e| {
        tracing::warn!("Google code exchange failed: {}", e);
        ApiError::Unauthorized("Google login failed".to_string())
    })?;

    let mut conn = get_conn!(state.pool);
    let ttl_days = state.config.session_ttl_days;

    let (user, token) = conn.transaction::<_, ApiError, _>(|conn| {
        let new_user = NewUser {
            google_id: &profile.sub,
            email: profile.email.as_deref(),
            name: None,
        };

        let user: User = diesel::insert_into(users::table)
            .values(&new_user)
            .on_conflict(users::google_id)
            .do_update()
            .set(users::email.eq(excluded(users::email)))
            .returning(User::as_returning())
            .get_result(conn)?;

        let token = create_session(conn, user.id, ttl_days)?;
        Ok((user, token))
    })?;

    tracing::info!(user_id = %user.id, "User logged in with Google");

    Ok((
        [(header::SET_COOKIE, state_cookie("", 0))],
        Json(LoginResponse {
            token,
            user_id: user.id,
            registered: user.name.is_some(),
        }),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/google/failure",
    tag = "auth",
    responses(
        (status = 200, description = "Login failed", body = MessageResponse)
    )
)]
pub async fn google_failure() -> Json<MessageResponse> {
    MessageResponse::new("failure")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_read_cookie_among_several() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark; lang=ja"));
        headers.append(
            header::COOKIE,
            HeaderValue::from_static("kondate_oauth_state=abc123"),
        );

        assert_eq!(read_cookie(&headers, STATE_COOKIE).as_deref(), Some("abc123"));
        assert_eq!(read_cookie(&headers, "lang").as_deref(), Some("ja"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_state_cookie_is_http_only_and_scoped() {
        let cookie = state_cookie("xyz", 600);
        assert!(cookie.starts_with("kondate_oauth_state=xyz;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/api/v1/auth/google"));
        assert!(cookie.ends_with("Max-Age=600"));
    }
}
