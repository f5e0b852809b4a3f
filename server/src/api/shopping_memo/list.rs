use crate::api::{ApiResult, ErrorResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::ShoppingMemo;
use crate::schema::shopping_memos;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingMemoResponse {
    pub id: Uuid,
    pub text: String,
    pub is_bought: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShoppingMemo> for ShoppingMemoResponse {
    fn from(memo: ShoppingMemo) -> Self {
        ShoppingMemoResponse {
            id: memo.id,
            text: memo.text,
            is_bought: memo.is_bought,
            sort_order: memo.sort_order,
            created_at: memo.created_at,
            updated_at: memo.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/shopping-memo-list",
    tag = "shopping_memo",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's memos in display order", body = Vec<ShoppingMemoResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_memos(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<ShoppingMemoResponse>>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let memos: Vec<ShoppingMemo> = shopping_memos::table
        .filter(shopping_memos::user_id.eq(user.id))
        .order((shopping_memos::sort_order.asc(), shopping_memos::created_at.asc()))
        .select(ShoppingMemo::as_select())
        .load(&mut conn)?;

    Ok(Json(memos.into_iter().map(ShoppingMemoResponse::from).collect()))
}
