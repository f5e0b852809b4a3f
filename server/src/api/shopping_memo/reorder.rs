use super::find_owned_memo;
use crate::api::{parse_direction, ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::ordering::MemoScope;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::{move_item, Positioned};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/shopping-memo-list/{id}/move/{position}",
    tag = "shopping_memo",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Memo ID"),
        ("position" = String, Path, description = "\"up\" or \"down\"")
    ),
    responses(
        (status = 200, description = "Memo swapped with its neighbour, or already first", body = MessageResponse),
        (status = 400, description = "Unknown position", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Memo or neighbour not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn move_memo(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id, position)): Path<(Uuid, Uuid, String)>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;
    let direction = parse_direction(&position)?;
    let mut conn = get_conn!(pool);

    conn.transaction::<_, ApiError, _>(|conn| {
        let memo = find_owned_memo(conn, user.id, id)?;
        let mut scope = MemoScope::new(conn, user.id);
        move_item(&mut scope, Positioned::new(memo.id, memo.sort_order), direction)?;
        Ok(())
    })?;

    Ok(MessageResponse::new("ShoppingMemo position changed"))
}
