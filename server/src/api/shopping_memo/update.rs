use super::find_owned_memo;
use crate::api::{ApiResult, ErrorResponse, MessageResponse};
use crate::auth::{ensure_same_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::shopping_memos;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use kondate_core::memo_text;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemoRequest {
    pub text: Option<String>,
    pub is_bought: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/shopping-memo-list/{id}",
    tag = "shopping_memo",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Memo ID")
    ),
    request_body = UpdateMemoRequest,
    responses(
        (status = 200, description = "Memo updated", body = MessageResponse),
        (status = 400, description = "Text is empty or longer than 1024 characters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Memo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_memo(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateMemoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    ensure_same_user(&user, user_id)?;

    let text = request.text.as_deref().map(memo_text).transpose()?;

    let mut conn = get_conn!(pool);
    let current = find_owned_memo(&mut conn, user.id, id)?;
    let text = text.unwrap_or(current.text);

    diesel::update(shopping_memos::table.find(current.id))
        .set((
            shopping_memos::text.eq(text),
            shopping_memos::is_bought.eq(request.is_bought.unwrap_or(current.is_bought)),
        ))
        .execute(&mut conn)?;

    Ok(MessageResponse::new("ShoppingMemo updated"))
}
