use super::find_owned_memo;
use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::ordering::MemoScope;
use crate::schema::shopping_memos;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::{close_gap, compact};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/shopping-memo-list/{id}",
    tag = "shopping_memo",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Memo ID")
    ),
    responses(
        (status = 200, description = "Memo deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Memo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_memo(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    conn.transaction::<_, ApiError, _>(|conn| {
        let memo = find_owned_memo(conn, user.id, id)?;
        diesel::delete(shopping_memos::table.find(memo.id)).execute(conn)?;
        close_gap(&mut MemoScope::new(conn, user.id), memo.sort_order)?;
        Ok(())
    })?;

    Ok(MessageResponse::new("ShoppingMemo deleted"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/shopping-memo-list/completed",
    tag = "shopping_memo",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Bought memos deleted, the rest renumbered", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No bought memos", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_completed_memos(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let deleted = conn.transaction::<_, ApiError, _>(|conn| {
        let deleted = diesel::delete(
            shopping_memos::table
                .filter(shopping_memos::user_id.eq(user.id))
                .filter(shopping_memos::is_bought.eq(true)),
        )
        .execute(conn)?;

        if deleted == 0 {
            return Err(ApiError::not_found("ShoppingMemo not found"));
        }

        compact(&mut MemoScope::new(conn, user.id))?;
        Ok(deleted)
    })?;

    tracing::debug!(user_id = %user.id, deleted, "Cleared bought memos");

    Ok(MessageResponse::new("ShoppingMemo deleted"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/shopping-memo-list",
    tag = "shopping_memo",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Every memo of the user deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "The user has no memos", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_all_memos(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let mut conn = get_conn!(pool);

    let deleted = diesel::delete(shopping_memos::table.filter(shopping_memos::user_id.eq(user.id)))
        .execute(&mut conn)?;

    if deleted == 0 {
        return Err(ApiError::not_found("ShoppingMemoList not found"));
    }

    tracing::info!(user_id = %user.id, deleted, "Memo list cleared");

    Ok(MessageResponse::new("ShoppingMemoList deleted"))
}
