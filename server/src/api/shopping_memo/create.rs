use crate::api::{ApiError, ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewShoppingMemo;
use crate::ordering::MemoScope;
use crate::schema::shopping_memos;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::{memo_text, next_position};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMemoRequest {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/shopping-memo-list",
    tag = "shopping_memo",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body = CreateMemoRequest,
    responses(
        (status = 200, description = "Memo appended to the end of the list", body = MessageResponse),
        (status = 400, description = "Text is empty or longer than 1024 characters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_memo(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<CreateMemoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;

    let text = memo_text(&request.text)?;

    let mut conn = get_conn!(pool);

    conn.transaction::<_, ApiError, _>(|conn| {
        let sort_order = next_position(MemoScope::new(conn, user.id).count()?);
        diesel::insert_into(shopping_memos::table)
            .values(&NewShoppingMemo {
                user_id: user.id,
                text: &text,
                is_bought: false,
                sort_order,
            })
            .execute(conn)?;
        Ok(())
    })?;

    Ok(MessageResponse::new("ShoppingMemo created"))
}
