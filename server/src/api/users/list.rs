use crate::api::{ApiResult, ErrorResponse};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a user; Google ids and emails stay private.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(State(pool): State<Arc<DbPool>>) -> ApiResult<Json<Vec<UserResponse>>> {
    let mut conn = get_conn!(pool);

    let rows: Vec<User> = users::table
        .order(users::created_at.asc())
        .select(User::as_select())
        .load(&mut conn)?;

    Ok(Json(
        rows.into_iter()
            .map(|user| UserResponse {
                id: user.id,
                name: user.name,
                created_at: user.created_at,
            })
            .collect(),
    ))
}
