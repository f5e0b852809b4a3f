use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{delete_session, AuthUser, BearerToken};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserResponse {
    pub id: Uuid,
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/is_logged_in",
    tag = "auth",
    responses(
        (status = 200, description = "Whether the bearer token is valid", body = LoggedInResponse)
    )
)]
pub async fn is_logged_in(user: Option<AuthUser>) -> Json<LoggedInResponse> {
    Json(LoggedInResponse {
        logged_in: user.is_some(),
        user_id: user.map(|AuthUser(user)| user.id),
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = "auth",
    request_body(content = RegisterRequest, example = json!({"name": "Alice"})),
    responses(
        (status = 200, description = "Name saved", body = RegisteredUserResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn register(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<RegisteredUserResponse>> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("name is required"))?;

    let mut conn = get_conn!(pool);

    let updated: User = diesel::update(users::table.filter(users::id.eq(user.id)))
        .set(users::name.eq(name))
        .returning(User::as_returning())
        .get_result(&mut conn)?;

    Ok(Json(RegisteredUserResponse {
        id: updated.id,
        name: name.to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session ended", body = MessageResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout(
    BearerToken(token): BearerToken,
    State(pool): State<Arc<DbPool>>,
) -> ApiResult<Json<MessageResponse>> {
    let mut conn = get_conn!(pool);
    let deleted = delete_session(&mut conn, &token)?;
    tracing::debug!(deleted, "Session logout");
    Ok(MessageResponse::new("Logged out"))
}
