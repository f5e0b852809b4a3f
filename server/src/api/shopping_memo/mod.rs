pub mod create;
pub mod delete;
pub mod list;
pub mod reorder;
pub mod update;

use crate::api::{ApiError, ApiResult};
use crate::models::ShoppingMemo;
use crate::schema::shopping_memos;
use crate::AppState;
use axum::routing::{delete as delete_method, get, put};
use axum::Router;
use diesel::prelude::*;
use utoipa::OpenApi;
use uuid::Uuid;

/// Returns the shopping memo routes, relative to /api/v1/users
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/shopping-memo-list",
            get(list::list_memos)
                .post(create::create_memo)
                .delete(delete::delete_all_memos),
        )
        .route(
            "/{user_id}/shopping-memo-list/completed",
            delete_method(delete::delete_completed_memos),
        )
        .route(
            "/{user_id}/shopping-memo-list/{id}",
            put(update::update_memo).delete(delete::delete_memo),
        )
        .route(
            "/{user_id}/shopping-memo-list/{id}/move/{position}",
            put(reorder::move_memo),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_memos,
        create::create_memo,
        update::update_memo,
        delete::delete_memo,
        delete::delete_completed_memos,
        delete::delete_all_memos,
        reorder::move_memo,
    ),
    components(schemas(
        list::ShoppingMemoResponse,
        create::CreateMemoRequest,
        update::UpdateMemoRequest,
    ))
)]
pub struct ApiDoc;

fn find_owned_memo(
    conn: &mut PgConnection,
    user_id: Uuid,
    memo_id: Uuid,
) -> ApiResult<ShoppingMemo> {
    shopping_memos::table
        .filter(shopping_memos::id.eq(memo_id))
        .filter(shopping_memos::user_id.eq(user_id))
        .select(ShoppingMemo::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("ShoppingMemo not found"))
}
